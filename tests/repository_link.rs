mod common;

use chrono::{Duration, DurationRound, Utc};
use shortlink::application::services::{
    NotFoundReason, RedirectResolver, Resolution, ShorteningService,
};
use shortlink::domain::entities::NewLink;
use shortlink::domain::repositories::{LinkRepository, StoreError};
use shortlink::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;

#[sqlx::test]
async fn test_save_assigns_id_and_slug_exists(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .save(NewLink::new(
            "abc123",
            "https://example.com/abc123",
            Utc::now(),
        ))
        .await
        .unwrap();

    assert!(link.id > 0);
    assert_eq!(link.slug, "abc123");
    assert!(link.is_active);
    assert!(link.expires_at.is_none());
    assert!(repo.exists_by_slug("abc123").await.unwrap());
    assert!(!repo.exists_by_slug("abc124").await.unwrap());
}

#[sqlx::test]
async fn test_concurrent_duplicate_save_has_one_winner(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    let (first, second) = tokio::join!(
        repo.save(NewLink::new("dup", "https://example.com/1", Utc::now())),
        repo.save(NewLink::new("dup", "https://example.com/2", Utc::now())),
    );

    let results = [first, second];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let violations = results
        .iter()
        .filter(|r| {
            matches!(r, Err(StoreError::UniqueViolation { slug }) if slug == "dup")
        })
        .count();

    assert_eq!(successes, 1);
    assert_eq!(violations, 1);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_sequential_duplicate_save_is_unique_violation(pool: PgPool) {
    common::insert_link_row(&pool, "taken01", "https://example.com", true, None).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo
        .save(NewLink::new("taken01", "https://example.org", Utc::now()))
        .await;

    assert_eq!(
        result,
        Err(StoreError::UniqueViolation {
            slug: "taken01".to_string()
        })
    );
}

#[sqlx::test]
async fn test_save_then_find_round_trip(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    // TIMESTAMPTZ keeps microseconds
    let now = Utc::now()
        .duration_trunc(Duration::microseconds(1))
        .unwrap();

    let saved = repo
        .save(
            NewLink::new("round01", "https://example.com/round", now)
                .with_active(false)
                .with_expires_at(Some(now + Duration::days(1))),
        )
        .await
        .unwrap();
    let found = repo.find_by_slug("round01").await.unwrap().unwrap();

    assert_eq!(found, saved);
    assert_eq!(found.created_at, now);
    assert_eq!(found.expires_at, Some(now + Duration::days(1)));
    assert!(!found.is_active);
}

#[sqlx::test]
async fn test_find_by_slug_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_slug("notfound").await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_find_all_ordered_by_id(pool: PgPool) {
    common::insert_link_row(&pool, "first01", "https://example.com/1", true, None).await;
    common::insert_link_row(&pool, "second1", "https://example.com/2", false, None).await;
    common::insert_link_row(
        &pool,
        "third01",
        "https://example.com/3",
        true,
        Some(Utc::now() - Duration::hours(1)),
    )
    .await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let links = repo.find_all().await.unwrap();

    let slugs: Vec<&str> = links.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(slugs, vec!["first01", "second1", "third01"]);
    assert!(links.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test]
async fn test_store_unavailable_after_pool_close(pool: PgPool) {
    let pool = Arc::new(pool);
    let repo = PgLinkRepository::new(pool.clone());
    pool.close().await;

    let result = repo.exists_by_slug("anything").await;

    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}

#[tokio::test]
async fn test_many_shortens_produce_unique_slugs() {
    let repo = Arc::new(MemoryLinkRepository::new());
    let service = ShorteningService::new(repo.clone());

    let mut slugs = HashSet::new();
    for i in 0..200 {
        let link = service
            .shorten(&format!("https://example.com/{i}"))
            .await
            .unwrap();
        assert!(slugs.insert(link.slug));
    }

    assert_eq!(repo.len().await, 200);
}

#[tokio::test]
async fn test_concurrent_shortens_produce_unique_slugs() {
    let repo = Arc::new(MemoryLinkRepository::new());
    let service = Arc::new(ShorteningService::new(repo.clone()));

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .shorten(&format!("https://example.com/{i}"))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut slugs = HashSet::new();
    for handle in handles {
        assert!(slugs.insert(handle.await.unwrap().slug));
    }

    let stored: HashSet<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.slug)
        .collect();
    assert_eq!(stored, slugs);
}

#[tokio::test]
async fn test_resolve_on_empty_store_is_not_found() {
    let resolver = RedirectResolver::new(Arc::new(MemoryLinkRepository::new()));

    let resolution = resolver.resolve("missing-slug").await.unwrap();

    assert_eq!(resolution, Resolution::NotFound(NotFoundReason::NotFound));
}
