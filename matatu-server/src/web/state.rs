//! Application state for the web layer.

use std::sync::Arc;

use crate::config::RegionConfig;
use crate::maps::GoogleMapsClient;

/// Shared application state.
///
/// Generic over the mapping provider so handlers can run against the
/// in-memory mock in tests.
pub struct AppState<P = GoogleMapsClient> {
    /// Mapping provider
    pub provider: Arc<P>,

    /// Country and language bias for place lookups
    pub region: Arc<RegionConfig>,
}

// Manual impl: derive would demand `P: Clone`.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            region: Arc::clone(&self.region),
        }
    }
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(provider: P, region: RegionConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            region: Arc::new(region),
        }
    }
}
