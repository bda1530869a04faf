//! Invoice review dashboard server.

use std::sync::Arc;

use invoice_store::InMemoryStore;
use review_web::{app, build_requester, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting invoice review server");

    let requester = build_requester(&config)?;
    let store = Arc::new(InMemoryStore::seeded());

    // Build application state
    let state = AppState::new(store, requester, config.defaults.clone());

    // Start server
    info!(addr = %config.addr, "Invoice review server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
