//! Place resolution: addresses, coordinates and autocomplete.
//!
//! A thin interpretation layer over [`crate::maps::MapsProvider`] that turns
//! provider status strings into [`PlaceError`]s.

mod error;
mod resolver;

pub use error::PlaceError;
pub use resolver::PlaceResolver;
