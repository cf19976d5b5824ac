//! The seam between our logic and the mapping provider.

use std::future::Future;

use crate::domain::Coordinates;

use super::error::MapsError;
use super::types::{
    AutocompleteResponse, ComputeRoutesResponse, GeocodeResponse, PlaceDetailsResponse,
};

/// Raw access to a geocoding / places / directions provider.
///
/// Implementations return the provider's response as-is; deciding what a
/// status or an empty result means is up to the caller. Each method is a
/// single outbound request with no retries.
pub trait MapsProvider: Send + Sync {
    /// Reverse geocode a coordinate pair.
    fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Result<GeocodeResponse, MapsError>> + Send;

    /// Forward geocode free text, biased to a country (ISO 3166-1 alpha-2).
    fn geocode(
        &self,
        address: &str,
        country: &str,
    ) -> impl Future<Output = Result<GeocodeResponse, MapsError>> + Send;

    /// Place autocomplete restricted to one country and language.
    fn autocomplete(
        &self,
        input: &str,
        country: &str,
        language: &str,
    ) -> impl Future<Output = Result<AutocompleteResponse, MapsError>> + Send;

    /// Look up a place by its opaque identifier.
    fn place_details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<PlaceDetailsResponse, MapsError>> + Send;

    /// Transit directions between two points, alternatives included.
    ///
    /// A non-success HTTP status is an error; a successful response with
    /// no routes is not.
    fn compute_routes(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> impl Future<Output = Result<ComputeRoutesResponse, MapsError>> + Send;
}
