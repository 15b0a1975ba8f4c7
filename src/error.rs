use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Application error type covering every failure surfaced at the
/// request boundary.
///
/// Each variant carries a human-readable message plus structured
/// details. The details are for server-side logs only and never appear
/// in a response body.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { message, details } => {
                tracing::debug!(%message, %details, "validation error");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::NotFound { message, details } => {
                tracing::debug!(%message, %details, "not found");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::Conflict { message, details } => {
                tracing::warn!(%message, %details, "conflict");
                (StatusCode::CONFLICT, message)
            }
            // Internal detail is logged but never sent to the client.
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            json!({ "fields": errors.to_string() }),
        )
    }
}

/// Maps a sqlx error to an [`AppError`].
///
/// Unique-constraint violations become [`AppError::Conflict`] so the
/// service layer can distinguish a lost creation race from a genuine
/// storage failure. Everything else is internal.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.message() }),
        );
    }

    AppError::internal("Database error", json!({ "source": e.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::bad_request("missing", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::not_found("unknown", json!({})),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::conflict("duplicate", json!({})),
                StatusCode::CONFLICT,
            ),
            (
                AppError::internal("boom", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Short URL not found", json!({ "code": "xyz" }));
        assert_eq!(err.to_string(), "Short URL not found");
    }
}
