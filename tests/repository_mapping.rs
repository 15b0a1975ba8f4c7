mod common;

use snip::AppError;
use snip::domain::repositories::MappingRepository;
use snip::infrastructure::persistence::SqliteMappingRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn repository(pool: SqlitePool) -> SqliteMappingRepository {
    SqliteMappingRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_create_pending_allocates_monotonic_ids(pool: SqlitePool) {
    let repo = repository(pool);

    let first = repo.create_pending("https://example.com/1").await.unwrap();
    let second = repo.create_pending("https://example.com/2").await.unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[sqlx::test]
async fn test_create_pending_leaves_code_unset(pool: SqlitePool) {
    let repo = repository(pool);

    let id = repo.create_pending("https://example.com").await.unwrap();

    let mapping = repo
        .find_by_long_url("https://example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(mapping.id, id);
    assert!(!mapping.has_code());
}

#[sqlx::test]
async fn test_create_pending_duplicate_url_conflicts(pool: SqlitePool) {
    let repo = repository(pool.clone());

    repo.create_pending("https://example.com").await.unwrap();
    let result = repo.create_pending("https://example.com").await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[sqlx::test]
async fn test_attach_and_find_by_short_code(pool: SqlitePool) {
    let repo = repository(pool);

    let id = repo.create_pending("https://example.com").await.unwrap();
    repo.attach_short_code(id, "1").await.unwrap();

    let mapping = repo.find_by_short_code("1").await.unwrap().unwrap();
    assert_eq!(mapping.id, id);
    assert_eq!(mapping.long_url, "https://example.com");
    assert_eq!(mapping.short_code.as_deref(), Some("1"));
}

#[sqlx::test]
async fn test_attach_to_missing_id_is_not_found(pool: SqlitePool) {
    let repo = repository(pool);

    let result = repo.attach_short_code(42, "G").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_find_by_short_code_unknown_is_none(pool: SqlitePool) {
    let repo = repository(pool);

    let found = repo.find_by_short_code("doesNotExist").await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_find_by_long_url_never_creates(pool: SqlitePool) {
    let repo = repository(pool.clone());

    let found = repo.find_by_long_url("https://example.com").await.unwrap();

    assert!(found.is_none());
    assert_eq!(common::count_mappings(&pool).await, 0);
}
