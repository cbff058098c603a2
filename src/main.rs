//! Application entry point and server initialization
//!
//! This module contains the main function that:
//! - Loads environment configuration
//! - Opens the document store and seeds the product catalog
//! - Starts the HTTP server with graceful shutdown support
//! - Releases the store once the server has stopped

use std::error::Error;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use opsvantage_api::config::Config;
use opsvantage_api::database::{AppState, Store};
use opsvantage_api::route::create_app;
use opsvantage_api::seed::seed_products;

/// Application entry point
///
/// # Environment Variables
///
/// - `DATABASE_URL` - Path to the database file (required)
/// - `DB_NAME` - Logical database name (required)
/// - `PORT` - Server port number (default: 8080)
/// - `HOST` - Bind address (default: 0.0.0.0)
/// - `RUST_LOG` - Log filter (default: `opsvantage_api=debug,tower_http=debug`)
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file if it exists
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("opsvantage_api=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    let store = Store::open(&config.database_url, &config.db_name)?;

    // A failed seed leaves an empty catalog but must not keep the API down.
    if let Err(err) = seed_products(&store).await {
        error!(error = %err, "error during startup seeding");
    }

    let app = create_app(AppState::new(store.clone())).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, database = %config.database_url, db_name = %config.db_name, "OpsVantage Digital API started");

    // The server keeps running until it receives SIGTERM or SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close();

    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
