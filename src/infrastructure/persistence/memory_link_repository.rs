//! In-process link repository.
//!
//! Used when the service runs without a database (`APP_SKIP_DB`) and in
//! tests. Contents are lost on shutdown.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};

#[derive(Debug, Default)]
struct Inner {
    links: Vec<Link>,
    last_id: i64,
}

/// An in-memory link store with the same uniqueness contract as the
/// PostgreSQL one: the slug check and the insert happen under one lock.
#[derive(Debug, Clone, Default)]
pub struct MemoryLinkRepository {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.links.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn exists_by_slug(&self, slug: &str) -> Result<bool, StoreError> {
        Ok(self
            .inner
            .lock()
            .await
            .links
            .iter()
            .any(|link| link.slug == slug))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, StoreError> {
        Ok(self
            .inner
            .lock()
            .await
            .links
            .iter()
            .find(|link| link.slug == slug)
            .cloned())
    }

    async fn save(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let mut inner = self.inner.lock().await;

        if inner.links.iter().any(|link| link.slug == new_link.slug) {
            return Err(StoreError::UniqueViolation {
                slug: new_link.slug,
            });
        }

        inner.last_id += 1;
        let link = new_link.into_link(inner.last_id);
        inner.links.push(link.clone());

        Ok(link)
    }

    async fn find_all(&self) -> Result<Vec<Link>, StoreError> {
        Ok(self.inner.lock().await.links.clone())
    }
}
