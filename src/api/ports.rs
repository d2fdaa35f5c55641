use serde_json::Value;

use super::client::api_call;
use super::error::ApiError;
use crate::models::PortView;

/// Load the ports attached to a network.
pub async fn port_list(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    network_id: &str,
) -> Result<Vec<PortView>, ApiError> {
    let params = vec![("network_id".to_string(), network_id.to_string())];
    let payload =
        api_call(client, api_base_url, api_token, "GET", "/v2.0/ports", None, Some(params)).await?;
    let mut ports = Vec::new();
    if let Some(arr) = payload.get("ports").and_then(|d| d.as_array()) {
        for item in arr {
            ports.push(parse_port(item));
        }
    }
    Ok(ports)
}

fn parse_port(item: &Value) -> PortView {
    PortView {
        id: item.get("id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        name: item.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        network_id: item.get("network_id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        device_id: item.get("device_id").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        device_owner: item.get("device_owner").and_then(|v| v.as_str()).unwrap_or("").to_string(),
        mac_address: item.get("mac_address").and_then(|v| v.as_str()).map(|s| s.to_string()),
        status: item.get("status").and_then(|v| v.as_str()).unwrap_or("").to_string(),
    }
}
