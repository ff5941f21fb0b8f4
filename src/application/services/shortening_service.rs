//! Turns a raw URL into a persisted, resolvable short link.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::application::services::slug_generator::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_SLUG_LENGTH, SlugError, SlugGenerator,
};
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};

/// Default number of generate+save cycles per shorten call.
pub const DEFAULT_MAX_SAVE_ATTEMPTS: usize = 3;

/// Reasons a candidate URL is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must start with http:// or https://")]
    InvalidScheme,
}

impl UrlValidationError {
    /// Stable machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::InvalidScheme => "invalid-scheme",
        }
    }
}

/// Errors returned by [`ShorteningService::shorten`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    #[error(transparent)]
    Validation(#[from] UrlValidationError),

    #[error("could not find a free slug after {attempts} attempts")]
    GenerationExhausted {
        attempts: usize,
        last_candidate: String,
    },

    #[error("invalid slug generator settings: {0}")]
    Misconfigured(String),

    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl From<SlugError> for ShortenError {
    fn from(err: SlugError) -> Self {
        match err {
            SlugError::Exhausted {
                attempts,
                last_candidate,
            } => Self::GenerationExhausted {
                attempts,
                last_candidate,
            },
            SlugError::Store(e) => Self::Persistence(e),
            e @ (SlugError::InvalidLength(_) | SlugError::ZeroAttempts) => {
                Self::Misconfigured(e.to_string())
            }
        }
    }
}

/// Tunables for slug allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortenerSettings {
    /// Length of generated slugs.
    pub slug_length: usize,
    /// Candidates drawn per generation before giving up.
    pub max_slug_attempts: usize,
    /// Whole generate+save cycles before a lost insert race is surfaced.
    pub max_save_attempts: usize,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            slug_length: DEFAULT_SLUG_LENGTH,
            max_slug_attempts: DEFAULT_MAX_ATTEMPTS,
            max_save_attempts: DEFAULT_MAX_SAVE_ATTEMPTS,
        }
    }
}

/// Public view of a freshly shortened link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedLink {
    pub slug: String,
    pub path: String,
}

impl From<&Link> for ShortenedLink {
    fn from(link: &Link) -> Self {
        Self {
            slug: link.slug.clone(),
            path: link.path(),
        }
    }
}

/// Validates a candidate target URL and returns it trimmed.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] if nothing is left after trimming
/// - [`UrlValidationError::InvalidScheme`] unless it starts with `http://` or `https://`
pub fn validate_target_url(raw_url: &str) -> Result<&str, UrlValidationError> {
    let url = raw_url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(UrlValidationError::InvalidScheme);
    }

    Ok(url)
}

/// Orchestrates validation, slug allocation and persistence.
pub struct ShorteningService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    slug_generator: SlugGenerator<L>,
    settings: ShortenerSettings,
}

impl<L: LinkRepository + ?Sized> ShorteningService<L> {
    /// Creates a service with default settings.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_settings(link_repository, ShortenerSettings::default())
    }

    /// Creates a service with explicit settings.
    pub fn with_settings(link_repository: Arc<L>, settings: ShortenerSettings) -> Self {
        Self {
            slug_generator: SlugGenerator::new(link_repository.clone()),
            link_repository,
            settings,
        }
    }

    /// Shortens `raw_url` and returns the stored link with its assigned id.
    ///
    /// A [`StoreError::UniqueViolation`] on save means a concurrent request
    /// claimed the slug between the existence check and the insert; the whole
    /// generate+save cycle is then repeated, up to
    /// [`ShortenerSettings::max_save_attempts`] times in total.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::Validation`] for empty or non-HTTP(S) input
    /// - [`ShortenError::GenerationExhausted`] if no free slug was found
    /// - [`ShortenError::Persistence`] on store failures, or when every save
    ///   attempt lost its race
    pub async fn shorten(&self, raw_url: &str) -> Result<Link, ShortenError> {
        let target_url = validate_target_url(raw_url)?;
        let max_save_attempts = self.settings.max_save_attempts.max(1);

        let mut attempt = 0;
        loop {
            attempt += 1;

            let slug = self
                .slug_generator
                .generate(self.settings.slug_length, self.settings.max_slug_attempts)
                .await?;

            let new_link = NewLink::new(slug, target_url, Utc::now());

            match self.link_repository.save(new_link).await {
                Ok(link) => {
                    tracing::info!(
                        slug = %link.slug,
                        id = link.id,
                        target = %link.target_url,
                        "Short link created"
                    );
                    return Ok(link);
                }
                Err(StoreError::UniqueViolation { slug }) if attempt < max_save_attempts => {
                    tracing::warn!(slug = %slug, attempt, "Lost slug insert race, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
