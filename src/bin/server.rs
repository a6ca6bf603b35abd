//! Rounds HTTP Server Binary
//!
//! This is the main entry point for the delivery-rounds REST API server.
//! It initializes the store, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory store (default)
//! cargo run --bin rounds-server
//!
//! # Run with the JSON document store
//! STATE_PATH=data/rounds-state.json cargo run --bin rounds-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `STORE_TYPE`: "file" or "local" (default: file when STATE_PATH is set)
//! - `STATE_PATH`: Document path for the file store
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rounds_rust::db::StoreFactory;
use rounds_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Rounds HTTP Server");

    // Store selection: store.toml when present, environment otherwise.
    let store = StoreFactory::from_default_config().map_err(|e| anyhow::anyhow!(e))?;
    info!("Store initialized successfully");

    // Create application state
    let state = AppState::new(store);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
