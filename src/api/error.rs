use thiserror::Error;

/// Errors surfaced by the management and identity API clients.
///
/// The page services never match on the variants: any failure of a
/// collection fetch is converted into a warning, any failure of a
/// single-resource fetch aborts its page. Causal detail only reaches the
/// logs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API returned status {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response payload: {0}")]
    Decode(String),
}
