//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, map_sqlx_error};

/// SQLite repository for URL mapping storage and retrieval.
///
/// Uses sqlx prepared statements with bound parameters throughout.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError> {
        sqlx::query_as::<_, UrlMapping>(
            "SELECT id, long_url, short_code FROM urls WHERE long_url = ?",
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn create_pending(&self, long_url: &str) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("INSERT INTO urls (long_url) VALUES (?) RETURNING id")
            .bind(long_url)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn attach_short_code(&self, id: i64, code: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE urls SET short_code = ? WHERE id = ?")
            .bind(code)
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Mapping not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn find_by_short_code(&self, code: &str) -> Result<Option<UrlMapping>, AppError> {
        sqlx::query_as::<_, UrlMapping>(
            "SELECT id, long_url, short_code FROM urls WHERE short_code = ?",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }
}
