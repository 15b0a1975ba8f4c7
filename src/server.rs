//! HTTP server initialization and runtime setup.
//!
//! Handles database setup, Axum server lifecycle, and graceful
//! shutdown.

use crate::application::services::{ResolveService, ShortenService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite pool (creating the database file if missing)
/// - Embedded migrations
/// - Shortening and resolution services
/// - Axum HTTP server with graceful shutdown on interrupt
///
/// The pool is closed after the server stops so the database file is
/// released cleanly.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool.clone())));
    let shorten_service = Arc::new(ShortenService::new(repository.clone()));
    let resolve_service = Arc::new(ResolveService::new(repository));

    let state = AppState {
        shorten_service,
        resolve_service,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Database connection closed");

    Ok(())
}

/// Resolves once an interrupt signal arrives.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {e}"),
    }
}
