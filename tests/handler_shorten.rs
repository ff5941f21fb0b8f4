mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use shortlink::api::dto::shorten::ShortenResponse;
use shortlink::application::services::ShortenerSettings;
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::MemoryLinkRepository;
use shortlink::routes::router;
use shortlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

#[tokio::test]
async fn test_shorten_url_success() {
    let repository = MemoryLinkRepository::new();
    let server = common::create_test_server(repository.clone());

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<ShortenResponse>();
    assert_eq!(body.slug.len(), 7);
    assert!(body.slug.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body.path, format!("/{}", body.slug));

    let stored = repository.find_by_slug(&body.slug).await.unwrap().unwrap();
    assert_eq!(stored.target_url, "https://example.com/a");
    assert!(stored.is_active);
    assert!(stored.expires_at.is_none());
}

#[tokio::test]
async fn test_shorten_trims_url() {
    let repository = MemoryLinkRepository::new();
    let server = common::create_test_server(repository.clone());

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "  http://example.com/padded  " }))
        .await;

    response.assert_status_ok();
    let body = response.json::<ShortenResponse>();
    let stored = repository.find_by_slug(&body.slug).await.unwrap().unwrap();
    assert_eq!(stored.target_url, "http://example.com/padded");
}

#[tokio::test]
async fn test_shorten_same_url_twice_creates_two_links() {
    let repository = MemoryLinkRepository::new();
    let server = common::create_test_server(repository.clone());

    let first = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<ShortenResponse>();
    let second = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<ShortenResponse>();

    assert_ne!(first.slug, second.slug);
    assert_eq!(repository.len().await, 2);
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let repository = MemoryLinkRepository::new();
    let server = common::create_test_server(repository.clone());

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "ftp://x" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_shorten_rejects_empty_url() {
    let server = common::create_test_server(MemoryLinkRepository::new());

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "   " }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_malformed_json() {
    let server = common::create_test_server(MemoryLinkRepository::new());

    let response = server
        .post("/api/v1/shorten")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_missing_url_field() {
    let server = common::create_test_server(MemoryLinkRepository::new());

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_uses_configured_slug_length() {
    let settings = ShortenerSettings {
        slug_length: 12,
        ..ShortenerSettings::default()
    };
    let state = AppState::in_memory(MemoryLinkRepository::new(), "test", settings);
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<ShortenResponse>().slug.len(), 12);
}

#[sqlx::test]
async fn test_shorten_persists_to_postgres(pool: PgPool) {
    let state = AppState::postgres(
        Arc::new(pool.clone()),
        "test",
        ShortenerSettings::default(),
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com/pg" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<ShortenResponse>();

    let target: String = sqlx::query_scalar("SELECT target_url FROM links WHERE slug = $1")
        .bind(&body.slug)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(target, "https://example.com/pg");
    assert_eq!(common::count_links(&pool).await, 1);
}
