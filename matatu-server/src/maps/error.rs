//! Mapping provider error types.

/// Errors from talking to the mapping provider.
#[derive(Debug, thiserror::Error)]
pub enum MapsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Provider returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// No provider credential configured
    #[error("not configured: GOOGLE_MAPS_API_KEY is not set")]
    NotConfigured,
}

impl MapsError {
    /// Whether this is a missing-credential error.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, MapsError::NotConfigured)
    }
}
