//! Turning text and coordinates into places.

use tracing::{debug, info, warn};

use crate::config::RegionConfig;
use crate::domain::Coordinates;
use crate::maps::{MapsProvider, PlacePrediction, STATUS_OK, STATUS_ZERO_RESULTS};

use super::error::PlaceError;

/// Resolves addresses, coordinates and autocomplete suggestions through a
/// mapping provider.
///
/// Each operation is exactly one provider call (or none, when the input is
/// rejected up front).
pub struct PlaceResolver<'a, P> {
    provider: &'a P,
    region: &'a RegionConfig,
}

impl<'a, P: MapsProvider> PlaceResolver<'a, P> {
    pub fn new(provider: &'a P, region: &'a RegionConfig) -> Self {
        Self { provider, region }
    }

    /// Human-readable address for a coordinate pair.
    pub async fn resolve_address(&self, coordinates: Coordinates) -> Result<String, PlaceError> {
        let response = self.provider.reverse_geocode(coordinates).await?;

        match response.first_result() {
            Some(result) => Ok(result.formatted_address.clone()),
            None => {
                info!(
                    status = %response.status,
                    %coordinates,
                    "reverse geocode found nothing"
                );
                Err(PlaceError::NotFound {
                    query: coordinates.to_string(),
                })
            }
        }
    }

    /// Coordinates for a free-text address, biased to the configured country.
    pub async fn resolve_coordinates(&self, address: &str) -> Result<Coordinates, PlaceError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(PlaceError::Validation("address must not be empty"));
        }

        let response = self.provider.geocode(address, &self.region.country).await?;
        debug!(
            address,
            status = %response.status,
            results = response.results.len(),
            "geocoded"
        );

        let not_found = || PlaceError::NotFound {
            query: address.to_string(),
        };

        let location = response.first_result().ok_or_else(not_found)?.geometry.location;
        Coordinates::new(location.lat, location.lng).map_err(|e| {
            warn!(address, error = %e, "provider returned unusable coordinates");
            not_found()
        })
    }

    /// Autocomplete suggestions for partially typed text.
    ///
    /// Short input and provider trouble both yield an empty list: a failed
    /// lookup must never block the user from typing. Only a missing
    /// credential is reported as an error.
    pub async fn find_place_predictions(
        &self,
        partial: &str,
    ) -> Result<Vec<PlacePrediction>, PlaceError> {
        let input = partial.trim();
        if input.chars().count() < self.region.min_autocomplete_chars {
            return Ok(Vec::new());
        }

        let response = match self
            .provider
            .autocomplete(input, &self.region.country, &self.region.language)
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_not_configured() => return Err(PlaceError::Configuration),
            Err(e) => {
                warn!(input, error = %e, "autocomplete failed");
                return Ok(Vec::new());
            }
        };

        match response.status.as_str() {
            STATUS_OK => {
                let mut predictions = response.predictions;
                predictions.truncate(self.region.max_predictions);
                debug!(input, count = predictions.len(), "autocomplete");
                Ok(predictions)
            }
            STATUS_ZERO_RESULTS => Ok(Vec::new()),
            status => {
                warn!(
                    input,
                    status,
                    message = response.error_message.as_deref().unwrap_or(""),
                    "autocomplete returned an error status"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Formatted address for an autocomplete suggestion's place id.
    pub async fn resolve_place_details(&self, place_id: &str) -> Result<String, PlaceError> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(PlaceError::Validation("place id must not be empty"));
        }

        let response = self.provider.place_details(place_id).await?;

        let address = if response.status == STATUS_OK {
            response
                .result
                .and_then(|r| r.formatted_address.or(r.name))
                .filter(|a| !a.is_empty())
        } else {
            None
        };

        address.ok_or_else(|| PlaceError::NotFound {
            query: place_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::{MockCall, MockMapsProvider};

    fn westlands() -> Coordinates {
        Coordinates::new(-1.2676, 36.8108).unwrap()
    }

    fn region() -> RegionConfig {
        RegionConfig::default()
    }

    #[tokio::test]
    async fn resolve_coordinates_uses_country_bias() {
        let mock = MockMapsProvider::new().with_place("Westlands", westlands());
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        let coords = resolver.resolve_coordinates("  Westlands ").await.unwrap();
        assert_eq!(coords, westlands());
        assert_eq!(
            mock.calls(),
            vec![MockCall::Geocode {
                address: "Westlands".into(),
                country: "KE".into(),
            }]
        );
    }

    #[tokio::test]
    async fn resolve_coordinates_not_found() {
        let mock = MockMapsProvider::new();
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        let err = resolver
            .resolve_coordinates("Nonexistent Place")
            .await
            .unwrap_err();
        match err {
            PlaceError::NotFound { query } => assert_eq!(query, "Nonexistent Place"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn resolve_coordinates_rejects_empty_input() {
        let mock = MockMapsProvider::new();
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        let err = resolver.resolve_coordinates("   ").await.unwrap_err();
        assert!(matches!(err, PlaceError::Validation(_)));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn resolve_address_round_trip() {
        let mock = MockMapsProvider::new().with_place("Westlands", westlands());
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        let address = resolver.resolve_address(westlands()).await.unwrap();
        assert_eq!(address, "Westlands, Nairobi, Kenya");

        let nowhere = Coordinates::new(10.0, 10.0).unwrap();
        let err = resolver.resolve_address(nowhere).await.unwrap_err();
        assert!(matches!(err, PlaceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn missing_key_is_configuration_error() {
        let mock = MockMapsProvider::new().without_api_key();
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        let err = resolver.resolve_coordinates("Westlands").await.unwrap_err();
        assert!(matches!(err, PlaceError::Configuration));

        let err = resolver.find_place_predictions("West").await.unwrap_err();
        assert!(matches!(err, PlaceError::Configuration));
    }

    #[tokio::test]
    async fn short_autocomplete_input_skips_provider() {
        let mock = MockMapsProvider::new().with_prediction("p1", "Westlands", "Nairobi");
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        assert!(resolver.find_place_predictions("W").await.unwrap().is_empty());
        assert!(resolver.find_place_predictions(" W ").await.unwrap().is_empty());
        assert!(resolver.find_place_predictions("").await.unwrap().is_empty());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn autocomplete_caps_at_five() {
        let mut mock = MockMapsProvider::new();
        for i in 0..8 {
            mock = mock.with_prediction(&format!("p{i}"), &format!("Stage {i}"), "Nairobi");
        }
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        let predictions = resolver.find_place_predictions("stage").await.unwrap();
        assert_eq!(predictions.len(), 5);
        assert_eq!(predictions[0].place_id, "p0");
    }

    #[tokio::test]
    async fn autocomplete_zero_results_is_empty() {
        let mock = MockMapsProvider::new().with_prediction("p1", "Westlands", "Nairobi");
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        let predictions = resolver.find_place_predictions("Kisumu").await.unwrap();
        assert!(predictions.is_empty());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn autocomplete_error_status_is_empty() {
        for status in ["REQUEST_DENIED", "OVER_QUERY_LIMIT", "INVALID_REQUEST"] {
            let mock = MockMapsProvider::new()
                .with_prediction("p1", "Westlands", "Nairobi")
                .with_autocomplete_status(status);
            let region = region();
            let resolver = PlaceResolver::new(&mock, &region);

            let predictions = resolver.find_place_predictions("West").await.unwrap();
            assert!(predictions.is_empty(), "{status}");
            assert_eq!(mock.call_count(), 1);
        }
    }

    #[tokio::test]
    async fn autocomplete_http_failure_is_empty() {
        let mock = MockMapsProvider::new()
            .with_prediction("p1", "Westlands", "Nairobi")
            .with_autocomplete_failure(503);
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        let predictions = resolver.find_place_predictions("West").await.unwrap();
        assert!(predictions.is_empty());
    }

    #[tokio::test]
    async fn autocomplete_missing_key_wins_over_failure() {
        let mock = MockMapsProvider::new()
            .with_autocomplete_failure(503)
            .without_api_key();
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        let err = resolver.find_place_predictions("West").await.unwrap_err();
        assert!(matches!(err, PlaceError::Configuration));
    }

    #[tokio::test]
    async fn place_details_prefers_formatted_address() {
        let mock = MockMapsProvider::new()
            .with_details("p1", Some("Sarit Centre, Nairobi"), Some("Sarit"))
            .with_details("p2", None, Some("Junction Mall"));
        let region = region();
        let resolver = PlaceResolver::new(&mock, &region);

        assert_eq!(
            resolver.resolve_place_details("p1").await.unwrap(),
            "Sarit Centre, Nairobi"
        );
        assert_eq!(
            resolver.resolve_place_details("p2").await.unwrap(),
            "Junction Mall"
        );

        let err = resolver.resolve_place_details("p3").await.unwrap_err();
        assert!(matches!(err, PlaceError::NotFound { .. }));
    }
}
