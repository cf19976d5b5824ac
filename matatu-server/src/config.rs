//! Server configuration.
//!
//! Everything is read from the environment once at startup. A missing
//! provider key is not fatal here: the server starts and every request that
//! needs the provider fails with a configuration error instead.

use std::net::SocketAddr;

use crate::maps::MapsConfig;

/// Environment variable holding the Google Maps Platform key.
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const BIND_ADDR_VAR: &str = "MATATU_BIND_ADDR";
pub const STATIC_DIR_VAR: &str = "MATATU_STATIC_DIR";
pub const TIMEOUT_VAR: &str = "MATATU_HTTP_TIMEOUT_SECS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Regional settings for place lookups.
#[derive(Debug, Clone)]
pub struct RegionConfig {
    /// ISO 3166-1 alpha-2 country code that geocoding and autocomplete are
    /// biased to.
    pub country: String,

    /// Language for autocomplete suggestions.
    pub language: String,

    /// Maximum number of autocomplete suggestions returned.
    pub max_predictions: usize,

    /// Inputs shorter than this (in characters) get no suggestions.
    pub min_autocomplete_chars: usize,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            country: "KE".to_string(),
            language: "en".to_string(),
            max_predictions: 5,
            min_autocomplete_chars: 2,
        }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: String,
    pub maps: MapsConfig,
    pub region: RegionConfig,
}

impl ServerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|_| ConfigError::Invalid {
            var: BIND_ADDR_VAR,
            value: bind.clone(),
        })?;

        let static_dir = lookup(STATIC_DIR_VAR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let mut maps = MapsConfig::new();
        if let Some(key) = lookup(API_KEY_VAR) {
            maps = maps.with_api_key(key);
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw.parse().map_err(|_| ConfigError::Invalid {
                var: TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            maps = maps.with_timeout(secs);
        }

        Ok(Self {
            bind_addr,
            static_dir,
            maps,
            region: RegionConfig::default(),
        })
    }
}
