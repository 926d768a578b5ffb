//! MBTA API error types.

/// Errors that can occur when talking to the MBTA V3 API.
#[derive(Debug, thiserror::Error)]
pub enum MbtaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key
    #[error("unauthorized: check MBTA_API_KEY")]
    Unauthorized,

    /// Rate limited by the API (20 req/min without a key)
    #[error("rate limited by MBTA API")]
    RateLimited,

    /// The requested stop does not exist
    #[error("stop not found: {id}")]
    StopNotFound { id: String },

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
