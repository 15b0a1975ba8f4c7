//! DTOs for the URL submission endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a single long URL.
///
/// The field name matches the original form field, so the same payload
/// works form-encoded or as JSON.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    /// The original URL to shorten.
    #[validate(length(min = 1, message = "Long URL is required"))]
    pub longurl: String,
}
