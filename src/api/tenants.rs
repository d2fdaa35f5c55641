use super::client::api_call;
use super::error::ApiError;
use crate::models::TenantRecord;

/// Load the tenant directory from the identity service.
/// `admin` requests the privileged listing that covers every tenant, not
/// just the ones the caller belongs to.
pub async fn tenant_list(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    admin: bool,
) -> Result<Vec<TenantRecord>, ApiError> {
    let params = if admin {
        Some(vec![("admin".to_string(), "true".to_string())])
    } else {
        None
    };
    let payload =
        api_call(client, api_base_url, api_token, "GET", "/v2.0/tenants", None, params).await?;
    let mut tenants = Vec::new();
    if let Some(arr) = payload.get("tenants").and_then(|d| d.as_array()) {
        for item in arr {
            tenants.push(TenantRecord {
                id: item.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                name: item.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
                enabled: item.get("enabled").and_then(|v| v.as_bool()).unwrap_or(true),
            });
        }
    }
    Ok(tenants)
}
