mod common;

use sqlx::SqlitePool;

#[sqlx::test]
async fn test_concurrent_same_url_creates_one_mapping(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());

    let (first, second) = tokio::join!(
        state.shorten_service.shorten("https://example.com/race"),
        state.shorten_service.shorten("https://example.com/race"),
    );

    let first = first.unwrap();
    let second = second.unwrap();

    assert_eq!(first, second);
    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_then_resolve_round_trip(pool: SqlitePool) {
    let state = common::create_test_state(pool);

    let code = state
        .shorten_service
        .shorten("https://example.com/a/b")
        .await
        .unwrap();
    assert_eq!(code, "1");

    let url = state.resolve_service.resolve(&code).await.unwrap();
    assert_eq!(url, "https://example.com/a/b");
}

#[sqlx::test]
async fn test_distinct_urls_get_distinct_codes(pool: SqlitePool) {
    let state = common::create_test_state(pool);

    let first = state
        .shorten_service
        .shorten("https://example.com/one")
        .await
        .unwrap();
    let second = state
        .shorten_service
        .shorten("https://example.com/two")
        .await
        .unwrap();

    assert_ne!(first, second);
}
