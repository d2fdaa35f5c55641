use serde_json::Value;

use super::client::api_call;
use super::error::ApiError;
use crate::models::SubnetView;

/// Load the subnets attached to a network.
pub async fn subnet_list(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    network_id: &str,
) -> Result<Vec<SubnetView>, ApiError> {
    let params = vec![("network_id".to_string(), network_id.to_string())];
    let payload =
        api_call(client, api_base_url, api_token, "GET", "/v2.0/subnets", None, Some(params)).await?;
    let mut subnets = Vec::new();
    if let Some(arr) = payload.get("subnets").and_then(|d| d.as_array()) {
        for item in arr {
            subnets.push(parse_subnet(item));
        }
    }
    Ok(subnets)
}

fn parse_subnet(item: &Value) -> SubnetView {
    SubnetView {
        id: item.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        name: item.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        network_id: item.get("network_id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        cidr: item.get("cidr").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        ip_version: item.get("ip_version").and_then(|v| v.as_i64()).unwrap_or(4),
        gateway_ip: item.get("gateway_ip").and_then(|v| v.as_str()).map(|s| s.to_string()),
    }
}
