//! Repository trait for URL mapping data access.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the URL mapping table.
///
/// Creation is two-phase: [`create_pending`](Self::create_pending)
/// inserts the long URL and allocates an identifier, then
/// [`attach_short_code`](Self::attach_short_code) stores the code
/// derived from that identifier.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds a mapping by its original long URL.
    ///
    /// Never creates anything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Inserts a new row with `short_code` unset and returns the
    /// freshly allocated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the long URL is already
    /// claimed. The UNIQUE constraint at the storage layer is the real
    /// guarantor here; a prior application-level lookup alone cannot
    /// rule out a concurrent insert.
    ///
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create_pending(&self, long_url: &str) -> Result<i64, AppError>;

    /// Sets `short_code` for the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has that identifier.
    /// Returns [`AppError::Internal`] on database errors.
    async fn attach_short_code(&self, id: i64, code: &str) -> Result<(), AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_code(&self, code: &str) -> Result<Option<UrlMapping>, AppError>;
}
