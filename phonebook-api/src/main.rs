//! Phonebook API service - Main entry point
//!
//! REST backend for the contacts directory: CRUD over /api/persons, the
//! /info summary page, static frontend serving and a health endpoint.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phonebook_api::{build_router, AppState};
use phonebook_common::{MongoStore, StoreConfig};

/// Command-line arguments for phonebook-api
#[derive(Parser, Debug)]
#[command(name = "phonebook-api")]
#[command(about = "Phonebook REST API service")]
#[command(version)]
struct Args {
    /// Port to listen on. Required: starting without a port is a
    /// configuration error, not a silent bind to nothing.
    #[arg(short, long, env = "PORT")]
    port: u16,

    /// MongoDB connection string; its path component selects the database
    #[arg(long, env = "MONGODB_URI")]
    mongodb_uri: String,

    /// Directory of static frontend assets
    #[arg(long, env = "PHONEBOOK_STATIC_DIR", default_value = "build")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phonebook_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Phonebook API (phonebook-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let config = StoreConfig::from_uri(&args.mongodb_uri);
    let store = MongoStore::connect(&config)
        .await
        .context("Failed to connect to MongoDB")?;
    info!("✓ Connected to MongoDB");

    let state = AppState::new(Arc::new(store));
    let app = build_router(state, &args.static_dir);
    info!("Serving static assets from {}", args.static_dir.display());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("phonebook-api listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
