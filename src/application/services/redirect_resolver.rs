//! Maps a slug to its redirect target, applying activation and expiry policy.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::repositories::{LinkRepository, StoreError};

/// Why a slug did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The slug was empty after trimming.
    Missing,
    /// No link has this slug.
    NotFound,
    /// The link exists but is deactivated.
    Inactive,
    /// The link's expiry is at or before the current time.
    Expired,
}

impl NotFoundReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NotFound => "not_found",
            Self::Inactive => "inactive",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a slug. Not-found is an expected result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Redirect(String),
    NotFound(NotFoundReason),
}

/// Resolves slugs through the link store.
pub struct RedirectResolver<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> RedirectResolver<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Resolves `slug` against the current time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only if the lookup itself fails.
    pub async fn resolve(&self, slug: &str) -> Result<Resolution, StoreError> {
        self.resolve_at(slug, Utc::now()).await
    }

    /// Resolves `slug` as of `now`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only if the lookup itself fails.
    pub async fn resolve_at(
        &self,
        slug: &str,
        now: DateTime<Utc>,
    ) -> Result<Resolution, StoreError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Ok(not_found(slug, NotFoundReason::Missing));
        }

        let Some(link) = self.link_repository.find_by_slug(slug).await? else {
            return Ok(not_found(slug, NotFoundReason::NotFound));
        };

        if !link.is_active {
            return Ok(not_found(slug, NotFoundReason::Inactive));
        }

        if link.is_expired_at(now) {
            return Ok(not_found(slug, NotFoundReason::Expired));
        }

        tracing::info!(slug, target = %link.target_url, "Slug resolved");
        Ok(Resolution::Redirect(link.target_url))
    }
}

fn not_found(slug: &str, reason: NotFoundReason) -> Resolution {
    tracing::info!(slug, reason = reason.as_str(), "Slug not resolvable");
    Resolution::NotFound(reason)
}
