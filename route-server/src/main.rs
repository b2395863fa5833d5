use route_server::config::AppConfig;
use route_server::directions::DirectionsClient;
use route_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;

    if config.api_key.is_none() {
        warn!("GOOGLE_MAPS_API_KEY not set. Route requests will fail.");
    }

    // Create Directions client
    let directions = DirectionsClient::new(config.directions_config())?;

    // Build app state and router
    let state = AppState::new(directions);
    let app = create_router(state, &config.allowed_origins);

    let addr = config.bind_addr;
    info!(%addr, origins = ?config.allowed_origins, "Smart Travel Recommender API listening");
    info!("API Endpoints:");
    info!("  GET  /                     - Liveness message");
    info!("  GET  /health               - Health check");
    info!("  POST /api/calculate-route  - Calculate a route");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
