//! Matatu route planning.
//!
//! Answers "how do I get from here to there by matatu?": both ends are
//! geocoded, the provider is asked for transit directions, and the answer
//! is normalized into an [`Itinerary`](crate::domain::Itinerary). Whatever
//! the provider leaves out (route codes, stops, frequencies) is filled in
//! so the result always has the same complete shape.

mod fallback;
mod filler;
mod normalize;
mod planner;

pub use fallback::{
    BRAND_COLOR, DEFAULT_DISTANCE_METERS, DEFAULT_ROUTES, DEFAULT_TIME, DEFAULT_VEHICLE,
    alternatives, minimal_itinerary, multi_leg_itinerary,
};
pub use filler::{FREQUENCIES, Filler, ROUTE_CODES};
pub use normalize::{format_distance, format_duration, normalize_routes};
pub use planner::{Endpoint, PlanError, RoutePlanner, RouteRequest};
