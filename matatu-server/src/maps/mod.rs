//! Mapping provider access.
//!
//! All spatial work (geocoding, place search, transit directions) is
//! delegated to Google Maps Platform. This module holds the response DTOs,
//! the [`MapsProvider`] seam, the real HTTP client and an in-memory mock.
//!
//! Key characteristics of the provider:
//! - Geocoding and Places report failures in a `status` field of a 200
//!   response ("ZERO_RESULTS", "REQUEST_DENIED", ...)
//! - The Routes API reports failures with HTTP status codes and returns
//!   `{}` when it has no route
//! - Durations are strings of whole seconds with an `s` suffix ("300s")

mod client;
mod error;
mod mock;
mod provider;
mod types;

pub use client::{GoogleMapsClient, MapsConfig, ROUTES_FIELD_MASK};
pub use error::MapsError;
pub use mock::{MockCall, MockMapsProvider};
pub use provider::MapsProvider;
pub use types::*;
