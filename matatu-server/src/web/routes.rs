//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use serde::de::DeserializeOwned;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::domain::Itinerary;
use crate::maps::MapsProvider;
use crate::places::{PlaceError, PlaceResolver};
use crate::routing::{Filler, PlanError, RoutePlanner, RouteRequest};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

const CONFIGURATION_ERROR: &str = "API configuration error";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<P: MapsProvider + 'static>(state: AppState<P>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/results", get(results_page::<P>))
        .route("/api/geocode", post(geocode_location::<P>))
        .route("/api/places/autocomplete", get(autocomplete_places::<P>))
        .route("/api/places/details", get(place_details::<P>))
        .route("/api/routes", post(plan_route::<P>))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search page.
async fn index_page() -> Result<Html<String>, AppError> {
    let html = IndexTemplate::new().render().map_err(template_error)?;
    Ok(Html(html))
}

/// Parse a JSON body manually so we can log it on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "unparseable JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Reverse geocode the browser's position into an address.
async fn geocode_location<P: MapsProvider>(
    State(state): State<AppState<P>>,
    body: Bytes,
) -> Result<Json<AddressResponse>, AppError> {
    let req: GeocodeRequest = parse_json(&body)?;

    let (latitude, longitude) = req.pair().ok_or_else(|| AppError::BadRequest {
        message: "Missing latitude or longitude".into(),
    })?;
    let coordinates = req.coordinates().ok_or_else(|| AppError::BadRequest {
        message: format!("Invalid coordinates: {latitude}, {longitude}"),
    })?;

    let resolver = PlaceResolver::new(state.provider.as_ref(), state.region.as_ref());
    let address = resolver
        .resolve_address(coordinates)
        .await
        .map_err(|e| match e {
            PlaceError::NotFound { .. } => AppError::BadRequest {
                message: "Could not determine location".into(),
            },
            other => place_error(other, "Internal server error"),
        })?;

    info!(%coordinates, %address, "reverse geocoded");
    Ok(Json(AddressResponse { address }))
}

/// Place suggestions for partially typed text.
async fn autocomplete_places<P: MapsProvider>(
    State(state): State<AppState<P>>,
    Query(query): Query<AutocompleteQuery>,
) -> Result<Json<PredictionsResponse>, AppError> {
    let resolver = PlaceResolver::new(state.provider.as_ref(), state.region.as_ref());
    let predictions = resolver
        .find_place_predictions(&query.input)
        .await
        .map_err(|e| place_error(e, "Failed to fetch predictions"))?;

    Ok(Json(PredictionsResponse { predictions }))
}

/// Formatted address for a chosen suggestion.
async fn place_details<P: MapsProvider>(
    State(state): State<AppState<P>>,
    Query(query): Query<DetailsQuery>,
) -> Result<Json<DetailsResponse>, AppError> {
    let place_id = query
        .place_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "Place ID required".into(),
        })?;

    let resolver = PlaceResolver::new(state.provider.as_ref(), state.region.as_ref());
    let formatted_address = resolver
        .resolve_place_details(place_id)
        .await
        .map_err(|e| match e {
            PlaceError::NotFound { .. } => AppError::NotFound {
                message: "Place not found".into(),
            },
            other => place_error(other, "Failed to fetch place details"),
        })?;

    Ok(Json(DetailsResponse { formatted_address }))
}

/// Plan a matatu route between two free-text locations.
async fn plan_route<P: MapsProvider>(
    State(state): State<AppState<P>>,
    body: Bytes,
) -> Result<Json<Itinerary>, AppError> {
    let req: RoutePlanRequest = parse_json(&body)?;
    let itinerary = plan(&state, &req).await?;
    Ok(Json(itinerary))
}

/// Server-rendered results page.
///
/// Failures render the error page rather than JSON.
async fn results_page<P: MapsProvider>(
    State(state): State<AppState<P>>,
    Query(req): Query<RoutePlanRequest>,
) -> Response {
    let outcome = match plan(&state, &req).await {
        Ok(itinerary) => {
            let (from, to) = req.endpoints().unwrap_or_default();
            ResultsTemplate::new(from, to, itinerary)
                .render()
                .map(|html| Html(html).into_response())
                .map_err(template_error)
        }
        Err(e) => Err(e),
    };

    outcome.unwrap_or_else(|e| e.into_page())
}

/// Shared planning path for the JSON API and the results page.
async fn plan<P: MapsProvider>(
    state: &AppState<P>,
    req: &RoutePlanRequest,
) -> Result<Itinerary, AppError> {
    let (from, to) = req.endpoints().ok_or_else(|| AppError::BadRequest {
        message: "Missing from or to location".into(),
    })?;
    info!(from, to, "planning route");

    let planner = RoutePlanner::new(state.provider.as_ref(), state.region.as_ref());
    let mut filler = Filler::from_entropy(Local::now().time());
    let itinerary = planner
        .plan(&RouteRequest::new(from, to), &mut filler)
        .await
        .map_err(AppError::from)?;

    Ok(itinerary)
}

fn template_error(e: askama::Error) -> AppError {
    AppError::Internal {
        message: format!("Template error: {e}"),
    }
}

/// Map a place error that has no endpoint-specific meaning.
fn place_error(e: PlaceError, fallback: &str) -> AppError {
    match e {
        PlaceError::Validation(msg) => AppError::BadRequest {
            message: msg.to_string(),
        },
        PlaceError::Configuration => AppError::configuration(),
        other => {
            error!(error = %other, "place lookup failed");
            AppError::Internal {
                message: fallback.to_string(),
            }
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    /// Missing provider credential. Logged once, at response time.
    fn configuration() -> Self {
        AppError::Internal {
            message: CONFIGURATION_ERROR.into(),
        }
    }

    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.as_str()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.as_str()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.as_str()),
        }
    }

    fn log(&self) {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(%status, message, "request failed");
        } else {
            warn!(%status, message, "request rejected");
        }
    }

    /// Render as the HTML error page instead of JSON.
    fn into_page(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();

        let template = ErrorTemplate::for_status(status, message);
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => (status, format!("Template error: {e}")).into_response(),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Validation(_) => AppError::BadRequest {
                message: "Missing from or to location".into(),
            },
            PlanError::Unresolved { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::Configuration => AppError::configuration(),
            PlanError::Provider(source) => {
                error!(error = %source, "directions provider failed");
                AppError::Internal {
                    message: "Failed to get route data".into(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}
