//! Link entity representing a slug-to-target mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum slug length accepted by the `links.slug` column.
pub const MAX_SLUG_LENGTH: usize = 32;

/// A persisted short link.
///
/// `id` is assigned by the store on insert and never chosen by the caller.
/// Links are immutable once stored; no update or delete operation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if the link has an expiry at or before `now`.
    ///
    /// Expiry is inclusive: a link stops resolving exactly at `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    /// Path under which the link is served, e.g. `/abc1234`.
    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// Input data for inserting a new link. Carries everything except the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewLink {
    /// An active, never-expiring link created at `created_at`.
    pub fn new(
        slug: impl Into<String>,
        target_url: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            slug: slug.into(),
            target_url: target_url.into(),
            created_at,
            is_active: true,
            expires_at: None,
        }
    }

    /// Sets the activation flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the expiry timestamp.
    pub fn with_expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Attaches a store-assigned id, producing the persisted form.
    pub fn into_link(self, id: i64) -> Link {
        Link {
            id,
            slug: self.slug,
            target_url: self.target_url,
            created_at: self.created_at,
            is_active: self.is_active,
            expires_at: self.expires_at,
        }
    }
}
