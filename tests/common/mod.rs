#![allow(dead_code)]

use snip::application::services::{ResolveService, ShortenService};
use snip::infrastructure::persistence::SqliteMappingRepository;
use snip::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool)));

    AppState {
        shorten_service: Arc::new(ShortenService::new(repository.clone())),
        resolve_service: Arc::new(ResolveService::new(repository)),
        base_url: "http://localhost:8080".to_string(),
    }
}

pub async fn create_test_mapping(pool: &SqlitePool, url: &str, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (long_url, short_code) VALUES (?, ?) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_pending_mapping(pool: &SqlitePool, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO urls (long_url) VALUES (?) RETURNING id")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn stored_code(pool: &SqlitePool, url: &str) -> Option<String> {
    sqlx::query_scalar::<_, Option<String>>("SELECT short_code FROM urls WHERE long_url = ?")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}
