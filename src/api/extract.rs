//! Content-type-aware request body extractor.

use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Extracts a body that may arrive form-encoded or as JSON.
///
/// The submission endpoint serves both the HTML form and programmatic
/// clients, so the extractor picks the deserializer from the request's
/// Content-Type: `application/json` bodies go through [`Json`],
/// everything else through [`Form`]. Deserialization failures surface
/// as [`AppError::Validation`].
pub struct FormOrJson<T>(pub T);

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|e| {
                AppError::bad_request(
                    "Invalid JSON request body",
                    json!({ "reason": e.to_string() }),
                )
            })?;
            Ok(Self(payload))
        } else {
            let Form(payload) = Form::<T>::from_request(req, state).await.map_err(|e| {
                AppError::bad_request(
                    "Invalid form request body",
                    json!({ "reason": e.to_string() }),
                )
            })?;
            Ok(Self(payload))
        }
    }
}
