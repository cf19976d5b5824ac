//! Google Maps Platform HTTP client.
//!
//! Wraps the Geocoding, Places and Routes web services. The API key is
//! optional at construction so the server can start without one; every
//! request made without a key fails with [`MapsError::NotConfigured`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::Coordinates;

use super::error::MapsError;
use super::provider::MapsProvider;
use super::types::{
    AutocompleteResponse, ComputeRoutesRequest, ComputeRoutesResponse, GeocodeResponse,
    PlaceDetailsResponse,
};

/// Default base URL for the legacy Maps web services (geocode, places).
const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default base URL for the Routes API.
const DEFAULT_ROUTES_BASE_URL: &str = "https://routes.googleapis.com";

/// Fields requested from `computeRoutes`.
pub const ROUTES_FIELD_MASK: &str = "routes.duration,routes.distanceMeters,routes.legs.duration,routes.legs.distanceMeters,routes.legs.steps.navigationInstruction,routes.legs.steps.travelMode,routes.legs.steps.transitDetails,routes.legs.steps.distanceMeters,routes.legs.steps.staticDuration,routes.legs.steps.localizedValues,routes.legs.steps.startLocation,routes.legs.steps.endLocation";

/// Place categories autocomplete is limited to.
const AUTOCOMPLETE_TYPES: &str = "establishment|geocode";

/// Fields requested from Place Details.
const PLACE_DETAILS_FIELDS: &str = "formatted_address,name";

/// How much of an unparseable body to keep for diagnostics.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the Google Maps client.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// Provider access credential
    pub api_key: Option<String>,
    /// Base URL for geocoding and places
    pub maps_base_url: String,
    /// Base URL for the Routes API
    pub routes_base_url: String,
    /// Request timeout in seconds; `None` keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl MapsConfig {
    /// Create a config with production URLs and no credential.
    pub fn new() -> Self {
        Self {
            api_key: None,
            maps_base_url: DEFAULT_MAPS_BASE_URL.to_string(),
            routes_base_url: DEFAULT_ROUTES_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set the API key. Empty keys count as missing.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = (!key.trim().is_empty()).then_some(key);
        self
    }

    /// Set a custom geocoding/places base URL (for testing).
    pub fn with_maps_base_url(mut self, url: impl Into<String>) -> Self {
        self.maps_base_url = url.into();
        self
    }

    /// Set a custom Routes API base URL (for testing).
    pub fn with_routes_base_url(mut self, url: impl Into<String>) -> Self {
        self.routes_base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Google Maps Platform client.
#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    http: reqwest::Client,
    api_key: Option<String>,
    maps_base_url: String,
    routes_base_url: String,
}

impl GoogleMapsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            maps_base_url: config.maps_base_url,
            routes_base_url: config.routes_base_url,
        })
    }

    /// Whether a credential is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, MapsError> {
        self.api_key.as_deref().ok_or(MapsError::NotConfigured)
    }

    /// GET a legacy web-service endpoint with the key appended.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, MapsError> {
        let key = self.api_key()?;
        let url = format!("{}/{}", self.maps_base_url, path);
        debug!(%url, ?params, "maps request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", key)])
            .send()
            .await?;

        read_json(response).await
    }
}

/// Check the status and decode a JSON body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, MapsError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(MapsError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| MapsError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
    })
}

impl MapsProvider for GoogleMapsClient {
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<GeocodeResponse, MapsError> {
        let latlng = coordinates.to_query_value();
        self.get_json("geocode/json", &[("latlng", latlng.as_str())])
            .await
    }

    async fn geocode(&self, address: &str, country: &str) -> Result<GeocodeResponse, MapsError> {
        let components = format!("country:{country}");
        self.get_json(
            "geocode/json",
            &[("address", address), ("components", components.as_str())],
        )
        .await
    }

    async fn autocomplete(
        &self,
        input: &str,
        country: &str,
        language: &str,
    ) -> Result<AutocompleteResponse, MapsError> {
        let components = format!("country:{}", country.to_lowercase());
        self.get_json(
            "place/autocomplete/json",
            &[
                ("input", input),
                ("components", components.as_str()),
                ("types", AUTOCOMPLETE_TYPES),
                ("language", language),
            ],
        )
        .await
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse, MapsError> {
        self.get_json(
            "place/details/json",
            &[("place_id", place_id), ("fields", PLACE_DETAILS_FIELDS)],
        )
        .await
    }

    async fn compute_routes(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<ComputeRoutesResponse, MapsError> {
        let key = self.api_key()?;
        let url = format!("{}/directions/v2:computeRoutes", self.routes_base_url);
        debug!(%url, %origin, %destination, "routes request");

        let response = self
            .http
            .post(&url)
            .header("X-Goog-Api-Key", key)
            .header("X-Goog-FieldMask", ROUTES_FIELD_MASK)
            .json(&ComputeRoutesRequest::transit(origin, destination))
            .send()
            .await?;

        read_json(response).await
    }
}
