use matatu_server::config::{API_KEY_VAR, ServerConfig};
use matatu_server::maps::GoogleMapsClient;
use matatu_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // A missing key is not fatal; provider-backed endpoints report it per request.
    if config.maps.api_key.is_none() {
        warn!("{API_KEY_VAR} not set. Place lookups and routing will fail.");
    }

    let client = GoogleMapsClient::new(config.maps.clone()).expect("Failed to create Maps client");
    let state = AppState::new(client, config.region.clone());
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    info!("Matatu Planner listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                    - Health check");
    println!("  GET  /results?from=&to=         - Itinerary page");
    println!("  POST /api/geocode               - Address for coordinates");
    println!("  GET  /api/places/autocomplete   - Place suggestions");
    println!("  GET  /api/places/details        - Address for a suggestion");
    println!("  POST /api/routes                - Plan a route");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
