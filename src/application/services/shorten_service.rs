//! Short link creation service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::base62;
use serde_json::json;

/// Service for creating short codes from long URLs.
///
/// Creation is idempotent: the same long URL always yields the same
/// code, backed by a UNIQUE constraint on the stored URL. Codes are
/// derived from the row identifier, so a new mapping is written in two
/// phases: insert the URL to allocate an id, then attach the encoded
/// id as the code.
pub struct ShortenService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> ShortenService<R> {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the short code for a long URL, creating a mapping if
    /// none exists.
    ///
    /// A creation that loses the insert race to a concurrent request
    /// for the same URL is retried as a lookup, so both callers observe
    /// the single winning code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for empty input; no store
    /// mutation occurs in that case. Storage failures propagate as
    /// [`AppError::Internal`].
    pub async fn shorten(&self, long_url: &str) -> Result<String, AppError> {
        if long_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "Long URL is required",
                json!({ "field": "longurl" }),
            ));
        }

        if let Some(existing) = self.repository.find_by_long_url(long_url).await? {
            return self.code_for(existing).await;
        }

        match self.repository.create_pending(long_url).await {
            Ok(id) => {
                let code = encode_id(id)?;
                self.repository.attach_short_code(id, &code).await?;
                Ok(code)
            }
            // Lost the insert race: the row now exists, so fall back
            // to the winner's mapping instead of surfacing the
            // constraint violation.
            Err(AppError::Conflict { .. }) => {
                let existing = self
                    .repository
                    .find_by_long_url(long_url)
                    .await?
                    .ok_or_else(|| {
                        AppError::internal(
                            "Mapping vanished after duplicate insert",
                            json!({ "long_url": long_url }),
                        )
                    })?;
                self.code_for(existing).await
            }
            Err(e) => Err(e),
        }
    }

    /// Constructs the full short URL for display.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Returns the code of an existing mapping, repairing rows whose
    /// attach was lost mid-flight.
    ///
    /// The code is a pure derivation of the identifier, so a row with
    /// `short_code` unset is recomputed and attached here rather than
    /// ever being treated as missing.
    async fn code_for(&self, mapping: UrlMapping) -> Result<String, AppError> {
        match mapping.short_code {
            Some(code) => Ok(code),
            None => {
                let code = encode_id(mapping.id)?;
                self.repository.attach_short_code(mapping.id, &code).await?;
                Ok(code)
            }
        }
    }
}

/// Converts a row identifier to its short code.
///
/// Row ids are AUTOINCREMENT-assigned and therefore positive; a
/// negative id reaching this point is a storage-layer bug, reported as
/// an internal error rather than silently encoded.
fn encode_id(id: i64) -> Result<String, AppError> {
    let id = u64::try_from(id).map_err(|_| {
        AppError::internal(
            "Negative mapping identifier",
            json!({ "id": id }),
        )
    })?;
    Ok(base62::encode(id))
}
