//! Handler for short URL redirect.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base62;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Reserved codes (the favicon probe) answer 204 No Content before any
/// lookup. Known codes answer 302 Found so clients never cache the
/// redirect as permanent; unknown codes answer 404.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if base62::is_reserved(&code) {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let long_url = state.resolve_service.resolve(&code).await?;

    tracing::debug!(%code, %long_url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}

/// Answers the browser favicon probe.
///
/// # Endpoint
///
/// `GET /favicon.ico`
///
/// Always 204, regardless of store state.
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
