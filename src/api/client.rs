use serde_json::Value;

use super::error::ApiError;

/// Core HTTP entry point shared by the management and identity clients.
/// Builds the request, attaches the auth token, and decodes the JSON body.
pub async fn api_call(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    method: &str,
    endpoint: &str,
    body: Option<Value>,
    params: Option<Vec<(String, String)>>,
) -> Result<Value, ApiError> {
    let url = format!("{}{}", api_base_url, endpoint);
    let mut req = match method {
        "GET" => client.get(&url),
        "POST" => client.post(&url),
        "PUT" => client.put(&url),
        "DELETE" => client.delete(&url),
        _ => client.get(&url),
    };

    if !api_token.is_empty() {
        req = req.header("X-Auth-Token", api_token);
    }

    if let Some(ref p) = params {
        req = req.query(p);
    }

    if let Some(ref b) = body {
        req = req.json(b);
    }

    tracing::debug!(method, endpoint, "API request");
    let resp = req.send().await?;
    let status = resp.status();

    if !status.is_success() {
        let detail = resp.text().await.unwrap_or_default();
        tracing::warn!(method, endpoint, status = status.as_u16(), "API error response");
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    // Deletes answer with an empty body.
    if status == reqwest::StatusCode::NO_CONTENT {
        return Ok(Value::Null);
    }

    resp.json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
