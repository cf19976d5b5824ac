//! Route planning: resolve both ends, fetch directions, normalize.

use std::fmt;

use rand::Rng;
use tracing::{info, warn};

use crate::config::RegionConfig;
use crate::domain::{Coordinates, Itinerary};
use crate::maps::{MapsError, MapsProvider};
use crate::places::{PlaceError, PlaceResolver};

use super::filler::Filler;
use super::normalize::normalize_routes;

/// Which end of the journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Error from route planning.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Invalid plan request
    #[error("invalid route request: {0}")]
    Validation(&'static str),

    /// One end of the journey could not be geocoded
    #[error("Could not find coordinates for {endpoint} location: {query}")]
    Unresolved { endpoint: Endpoint, query: String },

    /// No provider credential configured
    #[error("mapping provider is not configured")]
    Configuration,

    /// Provider failed outright
    #[error("directions provider error: {0}")]
    Provider(MapsError),
}

impl From<MapsError> for PlanError {
    fn from(err: MapsError) -> Self {
        match err {
            MapsError::NotConfigured => PlanError::Configuration,
            other => PlanError::Provider(other),
        }
    }
}

/// Request for a route between two free-text locations.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
}

impl RouteRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Both ends must be present.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.from.trim().is_empty() || self.to.trim().is_empty() {
            return Err(PlanError::Validation("missing from or to location"));
        }
        Ok(())
    }
}

/// Plans matatu itineraries.
///
/// Queries run strictly in sequence: geocode origin, geocode destination,
/// then one directions call. Nothing is retried and nothing is cached.
pub struct RoutePlanner<'a, P> {
    provider: &'a P,
    region: &'a RegionConfig,
}

impl<'a, P: MapsProvider> RoutePlanner<'a, P> {
    pub fn new(provider: &'a P, region: &'a RegionConfig) -> Self {
        Self { provider, region }
    }

    /// Plan a route between two free-text locations.
    pub async fn plan<R: Rng>(
        &self,
        request: &RouteRequest,
        filler: &mut Filler<R>,
    ) -> Result<Itinerary, PlanError> {
        request.validate()?;
        let from = request.from.trim();
        let to = request.to.trim();

        let origin = self.resolve(from, Endpoint::Origin).await?;
        let destination = self.resolve(to, Endpoint::Destination).await?;
        info!(from, %origin, to, %destination, "resolved endpoints");

        self.compute_itinerary(origin, destination, from, to, filler)
            .await
    }

    /// Itinerary between two coordinate pairs.
    ///
    /// The labels are the user's text for each end; they feed the stage
    /// heuristics when the provider leaves stops unnamed.
    pub async fn compute_itinerary<R: Rng>(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        origin_label: &str,
        destination_label: &str,
        filler: &mut Filler<R>,
    ) -> Result<Itinerary, PlanError> {
        let response = self
            .provider
            .compute_routes(origin, destination)
            .await
            .inspect_err(|e| warn!(error = %e, "directions request failed"))?;

        let itinerary = normalize_routes(&response, origin_label, destination_label, filler);
        info!(
            stage = %itinerary.stage,
            routes = ?itinerary.routes,
            steps = itinerary.steps.len(),
            "itinerary ready"
        );
        Ok(itinerary)
    }

    async fn resolve(&self, query: &str, endpoint: Endpoint) -> Result<Coordinates, PlanError> {
        let resolver = PlaceResolver::new(self.provider, self.region);

        resolver
            .resolve_coordinates(query)
            .await
            .map_err(|e| match e {
                PlaceError::NotFound { .. } | PlaceError::Validation(_) => {
                    PlanError::Unresolved {
                        endpoint,
                        query: query.to_string(),
                    }
                }
                PlaceError::Configuration => PlanError::Configuration,
                PlaceError::Provider(e) => PlanError::Provider(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use rand::rngs::StdRng;

    use super::*;
    use crate::maps::{ComputeRoutesResponse, MockCall, MockMapsProvider};

    fn filler() -> Filler<StdRng> {
        Filler::seeded(23, NaiveTime::from_hms_opt(17, 45, 0).unwrap())
    }

    fn westlands() -> Coordinates {
        Coordinates::new(-1.2676, 36.8108).unwrap()
    }

    fn karen() -> Coordinates {
        Coordinates::new(-1.3197, 36.7076).unwrap()
    }

    fn three_step_route(departure_stop: Option<&str>) -> ComputeRoutesResponse {
        let mut stop_details = serde_json::json!({ "arrivalStop": { "name": "Karen Hub" } });
        if let Some(name) = departure_stop {
            stop_details["departureStop"] = serde_json::json!({ "name": name });
        }
        serde_json::from_value(serde_json::json!({
            "routes": [{
                "duration": "2400s",
                "distanceMeters": 13500,
                "legs": [{ "steps": [
                    { "travelMode": "WALK", "distanceMeters": 300, "staticDuration": "240s" },
                    { "travelMode": "TRANSIT", "distanceMeters": 12900, "staticDuration": "1800s",
                      "transitDetails": {
                          "stopDetails": stop_details,
                          "transitLine": { "shortName": "23" }
                      } },
                    { "travelMode": "WALK", "distanceMeters": 300, "staticDuration": "300s" }
                ] }]
            }]
        }))
        .unwrap()
    }

    fn mock(routes: ComputeRoutesResponse) -> MockMapsProvider {
        MockMapsProvider::new()
            .with_place("Westlands", westlands())
            .with_place("Karen", karen())
            .with_routes(routes)
    }

    #[tokio::test]
    async fn westlands_to_karen_uses_provider_route() {
        let provider = mock(three_step_route(Some("Sarit Centre")));
        let region = RegionConfig::default();
        let planner = RoutePlanner::new(&provider, &region);

        let it = planner
            .plan(&RouteRequest::new("Westlands", "Karen"), &mut filler())
            .await
            .unwrap();

        assert_eq!(it.steps.len(), 3);
        assert!(it.routes.contains(&"23".to_string()));
        assert_eq!(it.stage, "Sarit Centre");
        assert_eq!(it.fare.as_str(), "KSh 50-80");
        assert_eq!(it.time, "40 min");
        assert_eq!(
            provider.calls(),
            vec![
                MockCall::Geocode {
                    address: "Westlands".into(),
                    country: "KE".into()
                },
                MockCall::Geocode {
                    address: "Karen".into(),
                    country: "KE".into()
                },
                MockCall::ComputeRoutes,
            ]
        );
    }

    #[tokio::test]
    async fn unnamed_departure_stop_falls_back_to_stage() {
        let provider = mock(three_step_route(None));
        let region = RegionConfig::default();
        let planner = RoutePlanner::new(&provider, &region);

        let it = planner
            .plan(&RouteRequest::new("Westlands", "Karen"), &mut filler())
            .await
            .unwrap();

        assert_eq!(it.stage, "Westlands Stage");
        assert_eq!(it.routes, vec!["23"]);
    }

    #[tokio::test]
    async fn unresolvable_origin_names_the_location() {
        let provider = mock(ComputeRoutesResponse::default());
        let region = RegionConfig::default();
        let planner = RoutePlanner::new(&provider, &region);

        let err = planner
            .plan(
                &RouteRequest::new("Nonexistent Place", "Karen"),
                &mut filler(),
            )
            .await
            .unwrap_err();

        match &err {
            PlanError::Unresolved { endpoint, query } => {
                assert_eq!(*endpoint, Endpoint::Origin);
                assert_eq!(query, "Nonexistent Place");
            }
            other => panic!("expected Unresolved, got {other:?}"),
        }
        assert!(err.to_string().contains("Nonexistent Place"));
        // Fails fast: no destination lookup, no directions call.
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn unresolvable_destination_is_reported_as_destination() {
        let provider = mock(ComputeRoutesResponse::default());
        let region = RegionConfig::default();
        let planner = RoutePlanner::new(&provider, &region);

        let err = planner
            .plan(&RouteRequest::new("Westlands", "Atlantis"), &mut filler())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PlanError::Unresolved {
                endpoint: Endpoint::Destination,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Could not find coordinates for destination location: Atlantis"
        );
    }

    #[tokio::test]
    async fn provider_http_failure_is_not_synthesized() {
        let provider = MockMapsProvider::new()
            .with_place("Westlands", westlands())
            .with_place("Karen", karen())
            .with_routes_status(500);
        let region = RegionConfig::default();
        let planner = RoutePlanner::new(&provider, &region);

        let err = planner
            .plan(&RouteRequest::new("Westlands", "Karen"), &mut filler())
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::Provider(_)));
    }

    #[tokio::test]
    async fn geocode_http_failure_stops_the_query() {
        let provider = mock(three_step_route(Some("Sarit Centre"))).with_geocode_failure(500);
        let region = RegionConfig::default();
        let planner = RoutePlanner::new(&provider, &region);

        let err = planner
            .plan(&RouteRequest::new("Westlands", "Karen"), &mut filler())
            .await
            .unwrap_err();

        assert!(matches!(err, PlanError::Provider(_)));
        // Origin lookup only: no destination lookup, no directions call.
        assert_eq!(
            provider.calls(),
            vec![MockCall::Geocode {
                address: "Westlands".into(),
                country: "KE".into()
            }]
        );
    }

    #[tokio::test]
    async fn missing_key_is_configuration_error() {
        let provider = mock(ComputeRoutesResponse::default()).without_api_key();
        let region = RegionConfig::default();
        let planner = RoutePlanner::new(&provider, &region);

        let err = planner
            .plan(&RouteRequest::new("Westlands", "Karen"), &mut filler())
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::Configuration));
    }

    #[tokio::test]
    async fn empty_request_is_rejected_before_any_call() {
        let provider = mock(ComputeRoutesResponse::default());
        let region = RegionConfig::default();
        let planner = RoutePlanner::new(&provider, &region);

        let err = planner
            .plan(&RouteRequest::new("Westlands", "  "), &mut filler())
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::Validation(_)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn routeless_response_gives_minimal_itinerary() {
        let provider = mock(ComputeRoutesResponse::default());
        let region = RegionConfig::default();
        let planner = RoutePlanner::new(&provider, &region);

        let it = planner
            .compute_itinerary(westlands(), karen(), "Westlands", "Karen", &mut filler())
            .await
            .unwrap();

        assert_eq!(it.steps.len(), 2);
        assert_eq!(it.stage, "Westlands Stage");
        assert_eq!(it.routes, vec!["14", "46"]);
    }

    #[tokio::test]
    async fn every_itinerary_has_routes_and_populated_steps() {
        let responses = [
            ComputeRoutesResponse::default(),
            three_step_route(None),
            serde_json::from_str(r#"{ "routes": [{ "legs": [] }] }"#).unwrap(),
        ];
        let region = RegionConfig::default();

        for (seed, response) in responses.into_iter().enumerate() {
            let provider = mock(response);
            let planner = RoutePlanner::new(&provider, &region);
            let mut filler = Filler::seeded(seed as u64, NaiveTime::from_hms_opt(6, 0, 0).unwrap());

            let it = planner
                .compute_itinerary(westlands(), karen(), "Westlands", "Karen", &mut filler)
                .await
                .unwrap();

            assert!(!it.routes.is_empty());
            for step in &it.steps {
                assert!(!step.instruction.is_empty());
                assert_eq!(step.icon, step.travel_mode.icon());
            }
        }
    }
}
