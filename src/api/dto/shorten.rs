//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::ShortenedLink;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// Candidate target; trimmed and checked for an `http(s)://` prefix.
    pub url: String,
}

/// Created short link: `{"slug": "...", "path": "/..."}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub slug: String,
    pub path: String,
}

impl From<ShortenedLink> for ShortenResponse {
    fn from(link: ShortenedLink) -> Self {
        Self {
            slug: link.slug,
            path: link.path,
        }
    }
}
