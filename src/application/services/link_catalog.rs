//! Read-only listing of stored links.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkRepository, StoreError};

/// Lists links for the API and the admin CLI.
pub struct LinkCatalog<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkCatalog<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns every stored link, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on store failures.
    pub async fn list_all(&self) -> Result<Vec<Link>, StoreError> {
        self.link_repository.find_all().await
    }

    /// Returns the raw record for `slug`, ignoring activation and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on store failures.
    pub async fn find(&self, slug: &str) -> Result<Option<Link>, StoreError> {
        self.link_repository.find_by_slug(slug.trim()).await
    }
}
