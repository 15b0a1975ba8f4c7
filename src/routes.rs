//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /submit`       - Create or fetch a short URL
//! - `GET  /{code}`       - Short link redirect
//! - `GET  /favicon.ico`  - Browser probe, always 204
//! - `GET  /`             - Submission form (static index page)
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{favicon_handler, redirect_handler, submit_handler};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and middleware.
///
/// `static_dir` is the directory served under `/static`; its
/// `index.html` doubles as the landing page at `/`.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/submit", post(submit_handler))
        .route("/favicon.ico", get(favicon_handler))
        .route("/{code}", get(redirect_handler))
        .route_service("/", ServeFile::new(format!("{static_dir}/index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(trace_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Creates the tracing middleware for HTTP requests.
///
/// Spans at `INFO` level carry method, path, and version; responses log
/// status and latency in milliseconds.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
