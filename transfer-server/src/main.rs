use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use transfer_server::cache::{CacheConfig, CachedMbtaClient};
use transfer_server::mbta::{MbtaClient, MbtaConfig};
use transfer_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // API key is optional; without one the MBTA allows 20 requests/minute.
    let mut mbta_config = MbtaConfig::new();
    match std::env::var("MBTA_API_KEY") {
        Ok(key) if !key.is_empty() => {
            mbta_config = mbta_config.with_api_key(key);
        }
        _ => {
            eprintln!("Warning: MBTA_API_KEY not set. Running at the unauthenticated rate limit.");
        }
    }

    let mbta_client = MbtaClient::new(mbta_config).expect("Failed to create MBTA client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_mbta = CachedMbtaClient::new(mbta_client, &cache_config);

    // Build app state
    let state = AppState::new(cached_mbta);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    println!("Transfer confidence server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health            - Health check");
    println!("  GET /api/stops         - List stops (optional ?route=Red)");
    println!("  GET /api/stops/nearby  - Stops near ?lat=&lon=&radius=");
    println!("  GET /api/transfer      - Evaluate a transfer ?from=&to=&speed=");
    println!("  GET /api/simulate      - What-if delay ?buffer_secs=&delay_secs=");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
