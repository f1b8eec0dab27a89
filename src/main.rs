//! Dynapharm Sync Server
//!
//! A file-backed HTTP API built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │               SYNC SERVER                   │
//!                      │                                             │
//!   Device Request     │  ┌─────────┐    ┌──────────┐               │
//!   ───────────────────┼─▶│  http   │───▶│ handlers │               │
//!                      │  │ server  │    │ dispatch │               │
//!                      │  └─────────┘    └────┬─────┘               │
//!                      │                      │                      │
//!                      │                      ▼                      │
//!                      │               ┌──────────────┐    ┌───────┐ │
//!   Device Response    │               │  collection  │───▶│ *.json│ │
//!   ◀──────────────────┼───────────────│    store     │    │ files │ │
//!                      │               └──────────────┘    └───────┘ │
//!                      │                                             │
//!                      │  ┌───────────────────────────────────────┐ │
//!                      │  │   config · lifecycle · observability  │ │
//!                      │  └───────────────────────────────────────┘ │
//!                      └────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dynapharm_sync::{CollectionStore, HttpServer, ServerConfig, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dynapharm_sync=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("dynapharm-sync v{} starting", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        data_dir = %config.storage.data_dir.display(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Create the data directory up front so the first write cannot fail on it
    let store = Arc::new(CollectionStore::open(&config.storage.data_dir)?);

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );
    tracing::info!(
        "Endpoints: /api/health, /api/clients, /api/users, /api/branches, /api/reports"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_interrupt();

    // Create and run HTTP server
    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
