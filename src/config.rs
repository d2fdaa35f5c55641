use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_NETWORK_API_BASE_URL: &str = "";
pub const DEFAULT_NETWORK_API_TOKEN: &str = "";
pub const DEFAULT_IDENTITY_API_BASE_URL: &str = "";
pub const DEFAULT_IDENTITY_API_TOKEN: &str = "";

// Local service ports used when no base URL is configured at all.
pub const FALLBACK_NETWORK_API_URL: &str = "http://localhost:9696";
pub const FALLBACK_IDENTITY_API_URL: &str = "http://localhost:5000";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_network_api_base_url() -> String {
    sanitize_base_url(
        &env::var("NETWORK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_NETWORK_API_BASE_URL.to_string()),
        FALLBACK_NETWORK_API_URL,
    )
}

pub fn get_network_api_token() -> String {
    env::var("NETWORK_API_TOKEN").unwrap_or_else(|_| DEFAULT_NETWORK_API_TOKEN.to_string())
}

pub fn get_identity_api_base_url() -> String {
    sanitize_base_url(
        &env::var("IDENTITY_API_BASE_URL").unwrap_or_else(|_| DEFAULT_IDENTITY_API_BASE_URL.to_string()),
        FALLBACK_IDENTITY_API_URL,
    )
}

pub fn get_identity_api_token() -> String {
    env::var("IDENTITY_API_TOKEN").unwrap_or_else(|_| DEFAULT_IDENTITY_API_TOKEN.to_string())
}

pub fn sanitize_base_url(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
