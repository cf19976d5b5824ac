//! Web layer for the matatu planner.
//!
//! Serves the search and results pages plus the JSON endpoints the search
//! page's script calls for autocomplete and geolocation.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
