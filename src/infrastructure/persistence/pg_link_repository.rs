//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::utils::db_error::is_unique_violation_on_slug;

/// Row shape of the `links` table.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: i64,
    slug: String,
    target_url: String,
    created_at: DateTime<Utc>,
    is_active: bool,
    expires_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Self {
            id: row.id,
            slug: row.slug,
            target_url: row.target_url,
            created_at: row.created_at,
            is_active: row.is_active,
            expires_at: row.expires_at,
        }
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Every operation runs in its own transaction. Uniqueness of `slug` is
/// enforced by the `links_slug_key` constraint.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn unavailable(e: sqlx::Error) -> StoreError {
    tracing::error!(error = %e, "Link store failure");
    StoreError::unavailable(e.to_string())
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn exists_by_slug(&self, slug: &str) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await.map_err(unavailable)?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM links WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&mut *tx)
                .await
                .map_err(unavailable)?;

        tx.commit().await.map_err(unavailable)?;
        Ok(exists)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, StoreError> {
        let mut tx = self.pool.begin().await.map_err(unavailable)?;

        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, slug, target_url, created_at, is_active, expires_at
            FROM links
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&mut *tx)
        .await
        .map_err(unavailable)?;

        tx.commit().await.map_err(unavailable)?;
        Ok(row.map(Link::from))
    }

    async fn save(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let mut tx = self.pool.begin().await.map_err(unavailable)?;

        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (slug, target_url, created_at, is_active, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, slug, target_url, created_at, is_active, expires_at
            "#,
        )
        .bind(&new_link.slug)
        .bind(&new_link.target_url)
        .bind(new_link.created_at)
        .bind(new_link.is_active)
        .bind(new_link.expires_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation_on_slug(&e) {
                StoreError::UniqueViolation {
                    slug: new_link.slug.clone(),
                }
            } else {
                unavailable(e)
            }
        })?;

        tx.commit().await.map_err(unavailable)?;
        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Link>, StoreError> {
        let mut tx = self.pool.begin().await.map_err(unavailable)?;

        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, slug, target_url, created_at, is_active, expires_at
            FROM links
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(unavailable)?;

        tx.commit().await.map_err(unavailable)?;
        Ok(rows.into_iter().map(Link::from).collect())
    }
}
