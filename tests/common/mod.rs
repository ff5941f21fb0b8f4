#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use shortlink::application::services::ShortenerSettings;
use shortlink::domain::entities::{Link, NewLink};
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::MemoryLinkRepository;
use shortlink::routes::router;
use shortlink::state::AppState;
use sqlx::PgPool;

pub fn create_test_state(repository: MemoryLinkRepository) -> AppState {
    AppState::in_memory(repository, "test", ShortenerSettings::default())
}

/// Full router (all middleware) over an in-memory store.
pub fn create_test_server(repository: MemoryLinkRepository) -> TestServer {
    TestServer::new(router(create_test_state(repository))).unwrap()
}

pub async fn create_test_link(repository: &MemoryLinkRepository, slug: &str, url: &str) -> Link {
    repository
        .save(NewLink::new(slug, url, Utc::now()))
        .await
        .unwrap()
}

pub async fn create_inactive_link(
    repository: &MemoryLinkRepository,
    slug: &str,
    url: &str,
) -> Link {
    repository
        .save(NewLink::new(slug, url, Utc::now()).with_active(false))
        .await
        .unwrap()
}

pub async fn create_expired_link(
    repository: &MemoryLinkRepository,
    slug: &str,
    url: &str,
) -> Link {
    let now = Utc::now();
    repository
        .save(
            NewLink::new(slug, url, now - Duration::hours(2))
                .with_expires_at(Some(now - Duration::hours(1))),
        )
        .await
        .unwrap()
}

pub async fn insert_link_row(
    pool: &PgPool,
    slug: &str,
    url: &str,
    is_active: bool,
    expires_at: Option<DateTime<Utc>>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (slug, target_url, is_active, expires_at) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(slug)
    .bind(url)
    .bind(is_active)
    .bind(expires_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
