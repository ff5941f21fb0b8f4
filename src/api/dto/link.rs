//! DTOs for link listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// JSON representation of a stored link.
///
/// Timestamps serialize as RFC 3339 strings; `expiresAt` is `null` when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub slug: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            slug: link.slug,
            target_url: link.target_url,
            created_at: link.created_at,
            is_active: link.is_active,
            expires_at: link.expires_at,
        }
    }
}

impl From<LinkResponse> for Link {
    fn from(response: LinkResponse) -> Self {
        Self {
            id: response.id,
            slug: response.slug,
            target_url: response.target_url,
            created_at: response.created_at,
            is_active: response.is_active,
            expires_at: response.expires_at,
        }
    }
}
