//! In-memory mapping provider for tests and local development.
//!
//! Serves canned responses and records every call, so tests can check
//! both what came back and whether the provider was consulted at all.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::Coordinates;

use super::error::MapsError;
use super::provider::MapsProvider;
use super::types::{
    AutocompleteResponse, ComputeRoutesResponse, GeocodeResponse, GeocodeResult, Geometry,
    LatLngLiteral, PlaceDetails, PlaceDetailsResponse, PlacePrediction, STATUS_OK,
    STATUS_ZERO_RESULTS, StructuredFormatting,
};

/// A provider call, as recorded by [`MockMapsProvider`].
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    ReverseGeocode(Coordinates),
    Geocode { address: String, country: String },
    Autocomplete { input: String },
    PlaceDetails(String),
    ComputeRoutes,
}

/// What `compute_routes` should produce.
#[derive(Debug, Clone)]
enum RoutesReply {
    Ok(ComputeRoutesResponse),
    HttpStatus(u16),
}

/// Mapping provider backed by canned data.
///
/// Unknown addresses geocode to `ZERO_RESULTS`, unknown place ids to
/// `NOT_FOUND`, and `compute_routes` returns an empty response until one is
/// configured.
pub struct MockMapsProvider {
    /// Lower-cased address → (formatted address, coordinates)
    places: HashMap<String, (String, Coordinates)>,
    predictions: Vec<PlacePrediction>,
    details: HashMap<String, PlaceDetails>,
    routes: RoutesReply,
    /// Status reported by autocomplete instead of matching predictions
    autocomplete_status: Option<String>,
    /// HTTP failures for the given operations
    autocomplete_failure: Option<u16>,
    geocode_failure: Option<u16>,
    configured: bool,
    calls: Mutex<Vec<MockCall>>,
}

impl MockMapsProvider {
    pub fn new() -> Self {
        Self {
            places: HashMap::new(),
            predictions: Vec::new(),
            details: HashMap::new(),
            routes: RoutesReply::Ok(ComputeRoutesResponse::default()),
            autocomplete_status: None,
            autocomplete_failure: None,
            geocode_failure: None,
            configured: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make `address` geocode to `coordinates` (and reverse-geocode back).
    pub fn with_place(mut self, address: &str, coordinates: Coordinates) -> Self {
        self.places.insert(
            address.to_lowercase(),
            (format!("{address}, Nairobi, Kenya"), coordinates),
        );
        self
    }

    /// Add an autocomplete suggestion. Suggestions match by
    /// case-insensitive substring of their description.
    pub fn with_prediction(mut self, place_id: &str, main_text: &str, secondary_text: &str) -> Self {
        self.predictions.push(PlacePrediction {
            place_id: place_id.to_string(),
            description: format!("{main_text}, {secondary_text}"),
            structured_formatting: StructuredFormatting {
                main_text: main_text.to_string(),
                secondary_text: secondary_text.to_string(),
            },
        });
        self
    }

    pub fn with_details(
        mut self,
        place_id: &str,
        formatted_address: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        self.details.insert(
            place_id.to_string(),
            PlaceDetails {
                formatted_address: formatted_address.map(str::to_string),
                name: name.map(str::to_string),
            },
        );
        self
    }

    /// Directions response to return.
    pub fn with_routes(mut self, response: ComputeRoutesResponse) -> Self {
        self.routes = RoutesReply::Ok(response);
        self
    }

    /// Make `compute_routes` fail with an HTTP status.
    pub fn with_routes_status(mut self, status: u16) -> Self {
        self.routes = RoutesReply::HttpStatus(status);
        self
    }

    /// Make autocomplete answer with a provider status such as
    /// `REQUEST_DENIED` and no predictions.
    pub fn with_autocomplete_status(mut self, status: &str) -> Self {
        self.autocomplete_status = Some(status.to_string());
        self
    }

    /// Make autocomplete fail with an HTTP status.
    pub fn with_autocomplete_failure(mut self, status: u16) -> Self {
        self.autocomplete_failure = Some(status);
        self
    }

    /// Make forward and reverse geocoding fail with an HTTP status.
    pub fn with_geocode_failure(mut self, status: u16) -> Self {
        self.geocode_failure = Some(status);
        self
    }

    /// Behave as if no credential were configured.
    pub fn without_api_key(mut self) -> Self {
        self.configured = false;
        self
    }

    /// Calls made so far, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    fn record(&self, call: MockCall) -> Result<(), MapsError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if self.configured {
            Ok(())
        } else {
            Err(MapsError::NotConfigured)
        }
    }
}

impl Default for MockMapsProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn http_failure(status: u16) -> MapsError {
    MapsError::Api {
        status,
        message: "mock failure".to_string(),
    }
}

fn geocode_hit(formatted_address: &str, c: Coordinates) -> GeocodeResponse {
    GeocodeResponse {
        status: STATUS_OK.to_string(),
        results: vec![GeocodeResult {
            formatted_address: formatted_address.to_string(),
            geometry: Geometry {
                location: LatLngLiteral {
                    lat: c.latitude,
                    lng: c.longitude,
                },
            },
            place_id: None,
        }],
        error_message: None,
    }
}

fn zero_results() -> GeocodeResponse {
    GeocodeResponse {
        status: STATUS_ZERO_RESULTS.to_string(),
        ..Default::default()
    }
}

impl MapsProvider for MockMapsProvider {
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<GeocodeResponse, MapsError> {
        self.record(MockCall::ReverseGeocode(coordinates))?;
        if let Some(status) = self.geocode_failure {
            return Err(http_failure(status));
        }

        let hit = self
            .places
            .values()
            .find(|(_, c)| *c == coordinates)
            .map(|(addr, c)| geocode_hit(addr, *c));
        Ok(hit.unwrap_or_else(zero_results))
    }

    async fn geocode(&self, address: &str, country: &str) -> Result<GeocodeResponse, MapsError> {
        self.record(MockCall::Geocode {
            address: address.to_string(),
            country: country.to_string(),
        })?;
        if let Some(status) = self.geocode_failure {
            return Err(http_failure(status));
        }

        let hit = self
            .places
            .get(&address.to_lowercase())
            .map(|(addr, c)| geocode_hit(addr, *c));
        Ok(hit.unwrap_or_else(zero_results))
    }

    async fn autocomplete(
        &self,
        input: &str,
        _country: &str,
        _language: &str,
    ) -> Result<AutocompleteResponse, MapsError> {
        self.record(MockCall::Autocomplete {
            input: input.to_string(),
        })?;
        if let Some(status) = self.autocomplete_failure {
            return Err(http_failure(status));
        }
        if let Some(status) = &self.autocomplete_status {
            return Ok(AutocompleteResponse {
                status: status.clone(),
                predictions: Vec::new(),
                error_message: Some("mock status".to_string()),
            });
        }

        let needle = input.to_lowercase();
        let predictions: Vec<PlacePrediction> = self
            .predictions
            .iter()
            .filter(|p| p.description.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        let status = if predictions.is_empty() {
            STATUS_ZERO_RESULTS
        } else {
            STATUS_OK
        };

        Ok(AutocompleteResponse {
            status: status.to_string(),
            predictions,
            error_message: None,
        })
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse, MapsError> {
        self.record(MockCall::PlaceDetails(place_id.to_string()))?;

        Ok(match self.details.get(place_id) {
            Some(details) => PlaceDetailsResponse {
                status: STATUS_OK.to_string(),
                result: Some(details.clone()),
                error_message: None,
            },
            None => PlaceDetailsResponse {
                status: "NOT_FOUND".to_string(),
                ..Default::default()
            },
        })
    }

    async fn compute_routes(
        &self,
        _origin: Coordinates,
        _destination: Coordinates,
    ) -> Result<ComputeRoutesResponse, MapsError> {
        self.record(MockCall::ComputeRoutes)?;

        match &self.routes {
            RoutesReply::Ok(response) => Ok(response.clone()),
            RoutesReply::HttpStatus(status) => Err(http_failure(*status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn westlands() -> Coordinates {
        Coordinates::new(-1.2676, 36.8108).unwrap()
    }

    #[tokio::test]
    async fn geocodes_known_places_case_insensitively() {
        let mock = MockMapsProvider::new().with_place("Westlands", westlands());

        let resp = mock.geocode("WESTLANDS", "KE").await.unwrap();
        let first = resp.first_result().unwrap();
        assert_eq!(first.geometry.location.lat, -1.2676);

        let resp = mock.geocode("Atlantis", "KE").await.unwrap();
        assert_eq!(resp.status, STATUS_ZERO_RESULTS);
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn records_calls_in_order() {
        let mock = MockMapsProvider::new();
        let _ = mock.place_details("p1").await;
        let _ = mock.compute_routes(westlands(), westlands()).await;

        assert_eq!(
            mock.calls(),
            vec![MockCall::PlaceDetails("p1".into()), MockCall::ComputeRoutes]
        );
    }

    #[tokio::test]
    async fn unconfigured_mock_fails_every_call() {
        let mock = MockMapsProvider::new().without_api_key();
        let err = mock.geocode("Westlands", "KE").await.unwrap_err();
        assert!(err.is_not_configured());
    }

    #[tokio::test]
    async fn geocode_failure_applies_to_both_directions() {
        let mock = MockMapsProvider::new()
            .with_place("Westlands", westlands())
            .with_geocode_failure(500);

        let err = mock.geocode("Westlands", "KE").await.unwrap_err();
        assert!(matches!(err, MapsError::Api { status: 500, .. }));
        let err = mock.reverse_geocode(westlands()).await.unwrap_err();
        assert!(matches!(err, MapsError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn autocomplete_status_overrides_predictions() {
        let mock = MockMapsProvider::new()
            .with_prediction("p1", "Westgate", "Nairobi")
            .with_autocomplete_status("OVER_QUERY_LIMIT");

        let resp = mock.autocomplete("West", "KE", "en").await.unwrap();
        assert_eq!(resp.status, "OVER_QUERY_LIMIT");
        assert!(resp.predictions.is_empty());
    }

    #[tokio::test]
    async fn http_failure_for_routes() {
        let mock = MockMapsProvider::new().with_routes_status(503);
        let err = mock
            .compute_routes(westlands(), westlands())
            .await
            .unwrap_err();
        assert!(matches!(err, MapsError::Api { status: 503, .. }));
    }
}
