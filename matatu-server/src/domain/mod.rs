//! Domain types for the matatu route finder.
//!
//! Everything here is request-scoped: built fresh for each query, never
//! cached and never mutated once handed to the web layer.

mod coords;
mod fare;
mod itinerary;
mod stage;

pub use coords::{Coordinates, InvalidCoordinates};
pub use fare::FareBand;
pub use itinerary::{
    Agency, AlternativeSummary, Itinerary, RouteStep, StepIcon, TIPS, TransitDetails,
    TransitLine, TransitStop, TravelMode, unique_routes,
};
pub use stage::{ALTERNATIVE_STAGES, DEFAULT_STAGE, STAGES, derive_stage};
