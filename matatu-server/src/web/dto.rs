//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Coordinates;
use crate::maps::PlacePrediction;

/// Request to reverse geocode the user's position.
///
/// Both fields are optional at the wire level so that a missing one is
/// reported as a 400 with our own message rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct GeocodeRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl GeocodeRequest {
    /// Both halves of the pair, if present.
    pub fn pair(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Validated coordinates.
    ///
    /// `None` when either half is missing or out of range.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let (lat, lng) = self.pair()?;
        Coordinates::new(lat, lng).ok()
    }
}

/// Reverse geocoding result.
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub address: String,
}

/// Query for place suggestions.
#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteQuery {
    #[serde(default)]
    pub input: String,
}

/// Place suggestions, at most the configured limit.
#[derive(Debug, Serialize)]
pub struct PredictionsResponse {
    pub predictions: Vec<PlacePrediction>,
}

/// Query for place details.
#[derive(Debug, Default, Deserialize)]
pub struct DetailsQuery {
    pub place_id: Option<String>,
}

/// Place details result.
#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub formatted_address: String,
}

/// Request to plan a route.
///
/// Used both as the JSON body of `POST /api/routes` and as the query of
/// the results page.
#[derive(Debug, Default, Deserialize)]
pub struct RoutePlanRequest {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl RoutePlanRequest {
    /// Both ends, trimmed, if both are non-empty.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        let from = self.from.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let to = self.to.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((from, to))
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
