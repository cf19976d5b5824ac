//! Place resolver error types.

use crate::maps::MapsError;

/// Errors from resolving places.
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// Required input was missing or empty
    #[error("invalid input: {0}")]
    Validation(&'static str),

    /// The provider has nothing for this query
    #[error("no match for {query}")]
    NotFound { query: String },

    /// No provider credential configured
    #[error("mapping provider is not configured")]
    Configuration,

    /// The provider could not be reached or failed
    #[error("provider error: {0}")]
    Provider(MapsError),
}

impl From<MapsError> for PlaceError {
    fn from(err: MapsError) -> Self {
        match err {
            MapsError::NotConfigured => PlaceError::Configuration,
            other => PlaceError::Provider(other),
        }
    }
}
