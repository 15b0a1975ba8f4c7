//! Short code resolution service.

use std::sync::Arc;

use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use serde_json::json;

/// Service resolving short codes back to their original URLs.
///
/// Resolution is a direct store lookup; codes are never decoded back
/// to identifiers.
pub struct ResolveService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> ResolveService<R> {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the long URL stored for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let mapping = self
            .repository
            .find_by_short_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "code": code }))
            })?;

        Ok(mapping.long_url)
    }
}
