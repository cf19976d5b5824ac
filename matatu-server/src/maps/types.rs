//! Google Maps Platform response DTOs.
//!
//! These types map directly to the Geocoding, Places and Routes API JSON.
//! They use `Option` and `#[serde(default)]` liberally because the
//! provider omits empty fields instead of sending nulls.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, TravelMode};

/// Status string the legacy Maps web services use for success.
pub const STATUS_OK: &str = "OK";

/// Status string for a well-formed query with nothing to return.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

// ============================================================================
// Geocoding API
// ============================================================================

/// Response from the Geocoding API (forward or reverse).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    /// "OK", "ZERO_RESULTS", "REQUEST_DENIED", ...
    pub status: String,

    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    pub error_message: Option<String>,
}

impl GeocodeResponse {
    /// First result, if the status is OK.
    pub fn first_result(&self) -> Option<&GeocodeResult> {
        if self.status == STATUS_OK {
            self.results.first()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
    pub place_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLngLiteral,
}

/// `{ "lat": .., "lng": .. }` as used by the legacy web services.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLngLiteral {
    pub lat: f64,
    pub lng: f64,
}

// ============================================================================
// Places API
// ============================================================================

/// Response from Place Autocomplete.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompleteResponse {
    pub status: String,

    #[serde(default)]
    pub predictions: Vec<PlacePrediction>,

    pub error_message: Option<String>,
}

/// A single autocomplete suggestion.
///
/// Passed through to the browser unchanged, so it serializes with the
/// provider's own field names.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlacePrediction {
    pub place_id: String,
    pub description: String,
    pub structured_formatting: StructuredFormatting,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StructuredFormatting {
    pub main_text: String,

    #[serde(default)]
    pub secondary_text: String,
}

/// Response from Place Details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    pub result: Option<PlaceDetails>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    pub formatted_address: Option<String>,
    pub name: Option<String>,
}

// ============================================================================
// Routes API (directions/v2:computeRoutes)
// ============================================================================

/// Response from `computeRoutes`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Duration in the "<seconds>s" encoding, e.g. "2712s".
    pub duration: Option<String>,

    pub distance_meters: Option<f64>,

    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub duration: Option<String>,
    pub distance_meters: Option<f64>,

    #[serde(default)]
    pub steps: Vec<RouteLegStep>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLegStep {
    pub navigation_instruction: Option<NavigationInstruction>,
    pub travel_mode: Option<TravelMode>,
    pub transit_details: Option<RouteTransitDetails>,
    pub distance_meters: Option<f64>,
    pub static_duration: Option<String>,
    pub duration: Option<String>,
    pub start_location: Option<Location>,
    pub end_location: Option<Location>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavigationInstruction {
    pub maneuver: Option<String>,
    pub instructions: Option<String>,
}

/// `{ "latLng": { "latitude": .., "longitude": .. } }`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat_lng: Option<LatLng>,
}

impl Location {
    pub fn coordinates(&self) -> Option<Coordinates> {
        let ll = self.lat_lng?;
        Coordinates::new(ll.latitude, ll.longitude).ok()
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTransitDetails {
    pub stop_details: Option<TransitStopDetails>,
    pub localized_values: Option<TransitLocalizedValues>,
    pub headsign: Option<String>,
    pub stop_count: Option<u32>,
    pub transit_line: Option<ProviderTransitLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitStopDetails {
    pub arrival_stop: Option<ProviderStop>,
    pub departure_stop: Option<ProviderStop>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderStop {
    pub name: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitLocalizedValues {
    pub arrival_time: Option<LocalizedTime>,
    pub departure_time: Option<LocalizedTime>,
}

impl TransitLocalizedValues {
    pub fn departure_text(&self) -> Option<&str> {
        self.departure_time.as_ref()?.text()
    }

    pub fn arrival_text(&self) -> Option<&str> {
        self.arrival_time.as_ref()?.text()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedTime {
    pub time: Option<LocalizedText>,
}

impl LocalizedTime {
    fn text(&self) -> Option<&str> {
        self.time.as_ref()?.text.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedText {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderTransitLine {
    #[serde(default)]
    pub agencies: Vec<ProviderAgency>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub color: Option<String>,
    pub vehicle: Option<TransitVehicle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderAgency {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransitVehicle {
    pub name: Option<LocalizedText>,

    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
}

// ============================================================================
// Routes API request body
// ============================================================================

/// Body for `computeRoutes`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub travel_mode: TravelMode,
    pub compute_alternative_routes: bool,
    pub route_modifiers: RouteModifiers,
}

impl ComputeRoutesRequest {
    /// Transit request with alternatives enabled.
    pub fn transit(origin: Coordinates, destination: Coordinates) -> Self {
        Self {
            origin: Waypoint::at(origin),
            destination: Waypoint::at(destination),
            travel_mode: TravelMode::Transit,
            compute_alternative_routes: true,
            route_modifiers: RouteModifiers::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Waypoint {
    pub location: WaypointLocation,
}

impl Waypoint {
    fn at(c: Coordinates) -> Self {
        Self {
            location: WaypointLocation {
                lat_lng: LatLng {
                    latitude: c.latitude,
                    longitude: c.longitude,
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointLocation {
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteModifiers {
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    pub avoid_ferries: bool,
}
