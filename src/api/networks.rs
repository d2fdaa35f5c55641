use serde_json::Value;

use super::client::api_call;
use super::error::ApiError;
use crate::models::{NetworkParams, NetworkView};

/// Load all networks visible to the caller.
pub async fn network_list(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
) -> Result<Vec<NetworkView>, ApiError> {
    let payload = api_call(client, api_base_url, api_token, "GET", "/v2.0/networks", None, None).await?;
    let mut networks = Vec::new();
    if let Some(arr) = payload.get("networks").and_then(|d| d.as_array()) {
        for item in arr {
            networks.push(parse_network(item));
        }
    }
    Ok(networks)
}

/// Load a single network by id.
pub async fn network_get(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    network_id: &str,
) -> Result<NetworkView, ApiError> {
    let endpoint = format!("/v2.0/networks/{}", network_id);
    let payload = api_call(client, api_base_url, api_token, "GET", &endpoint, None, None).await?;
    match payload.get("network") {
        Some(item) => Ok(parse_network(item)),
        None => Err(ApiError::Decode("missing \"network\" object in response".into())),
    }
}

pub async fn network_create(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    params: &NetworkParams,
) -> Result<NetworkView, ApiError> {
    let body = serde_json::json!({ "network": params });
    let payload =
        api_call(client, api_base_url, api_token, "POST", "/v2.0/networks", Some(body), None).await?;
    match payload.get("network") {
        Some(item) => Ok(parse_network(item)),
        None => Err(ApiError::Decode("missing \"network\" object in response".into())),
    }
}

pub async fn network_update(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    network_id: &str,
    params: &NetworkParams,
) -> Result<NetworkView, ApiError> {
    let endpoint = format!("/v2.0/networks/{}", network_id);
    let body = serde_json::json!({ "network": params });
    let payload = api_call(client, api_base_url, api_token, "PUT", &endpoint, Some(body), None).await?;
    match payload.get("network") {
        Some(item) => Ok(parse_network(item)),
        None => Err(ApiError::Decode("missing \"network\" object in response".into())),
    }
}

pub async fn network_delete(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    network_id: &str,
) -> Result<(), ApiError> {
    let endpoint = format!("/v2.0/networks/{}", network_id);
    api_call(client, api_base_url, api_token, "DELETE", &endpoint, None, None).await?;
    Ok(())
}

pub(crate) fn parse_network(item: &Value) -> NetworkView {
    NetworkView {
        id: item.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        name: item.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        tenant_id: item.get("tenant_id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        tenant_name: None,
        admin_state_up: item.get("admin_state_up").and_then(|v| v.as_bool()).unwrap_or(false),
        shared: item.get("shared").and_then(|v| v.as_bool()).unwrap_or(false),
        status: item.get("status").and_then(|v| v.as_str()).unwrap_or("").to_string(),
    }
}
