//! Repository trait for link data access.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Link, NewLink};

/// Errors raised by a [`LinkRepository`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The unique index on `slug` rejected the insert.
    #[error("slug '{slug}' is already taken")]
    UniqueViolation { slug: String },

    /// The backing store could not be reached or the unit of work could not
    /// be committed.
    #[error("link store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Shorthand for [`StoreError::Unavailable`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}

/// Sole gateway to persisted links.
///
/// Every operation runs as its own atomic unit of work; no operation spans
/// several calls. Slug uniqueness is guaranteed by the store itself, so
/// [`exists_by_slug`](LinkRepository::exists_by_slug) is only an advisory
/// pre-check and [`save`](LinkRepository::save) may still report
/// [`StoreError::UniqueViolation`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns true iff a link with exactly this slug exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on store failures.
    async fn exists_by_slug(&self, slug: &str) -> Result<bool, StoreError>;

    /// Finds a link by slug. Applies no activation or expiry policy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on store failures.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, StoreError>;

    /// Inserts a new link and returns it as persisted, including its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the slug is already taken
    /// and [`StoreError::Unavailable`] on store failures.
    async fn save(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Returns a snapshot of every stored link, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on store failures.
    async fn find_all(&self) -> Result<Vec<Link>, StoreError>;
}
