//! Handler for the URL submission endpoint.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use validator::Validate;

use crate::api::dto::SubmitRequest;
use crate::api::extract::FormOrJson;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the shortening result page.
///
/// Renders `templates/result.html` with the original URL and the full
/// short URL. A render failure becomes a 500 via `WebTemplate`.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub long_url: String,
    pub short_url: String,
}

/// Creates (or fetches) the short URL for a submitted long URL.
///
/// # Endpoint
///
/// `POST /submit`
///
/// Accepts the `longurl` field either form-encoded (the HTML form) or
/// as JSON. Submission is idempotent: resubmitting a known URL returns
/// the code it was already assigned.
///
/// # Errors
///
/// Returns 400 if `longurl` is missing or empty and 500 on storage or
/// template failures.
pub async fn submit_handler(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<SubmitRequest>,
) -> Result<ResultTemplate, AppError> {
    payload.validate()?;

    let code = state.shorten_service.shorten(&payload.longurl).await?;
    let short_url = state.shorten_service.short_url(&state.base_url, &code);

    Ok(ResultTemplate {
        long_url: payload.longurl,
        short_url,
    })
}
