//! Random slug generation with bounded collision retry.

use std::sync::Arc;

use rand::Rng;
use thiserror::Error;

use crate::domain::entities::MAX_SLUG_LENGTH;
use crate::domain::repositories::{LinkRepository, StoreError};

/// Slug alphabet: `[0-9a-zA-Z]`, 62 symbols.
pub const SLUG_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default slug length.
pub const DEFAULT_SLUG_LENGTH: usize = 7;

/// Default number of candidates drawn before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Errors returned by [`SlugGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug length must be between 1 and {max}, got {0}", max = MAX_SLUG_LENGTH)]
    InvalidLength(usize),

    #[error("slug attempt budget must be at least 1")]
    ZeroAttempts,

    #[error("no unused slug after {attempts} attempts (last candidate '{last_candidate}')")]
    Exhausted {
        attempts: usize,
        last_candidate: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Produces slugs not currently present in the link store.
///
/// The existence check is advisory: a concurrent insert may still claim the
/// returned slug before it is saved. The store's unique index is the
/// authoritative guard.
pub struct SlugGenerator<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> SlugGenerator<L> {
    /// Creates a generator that checks candidates against `link_repository`.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Generates a slug with the default length and attempt budget.
    ///
    /// # Errors
    ///
    /// See [`Self::generate`].
    pub async fn generate_default(&self) -> Result<String, SlugError> {
        self.generate(DEFAULT_SLUG_LENGTH, DEFAULT_MAX_ATTEMPTS)
            .await
    }

    /// Draws up to `max_attempts` random candidates of `length` symbols and
    /// returns the first one the store does not know.
    ///
    /// # Errors
    ///
    /// - [`SlugError::InvalidLength`] if `length` is 0 or exceeds [`MAX_SLUG_LENGTH`]
    /// - [`SlugError::ZeroAttempts`] if `max_attempts` is 0
    /// - [`SlugError::Exhausted`] if every candidate collided
    /// - [`SlugError::Store`] if the existence check fails
    pub async fn generate(&self, length: usize, max_attempts: usize) -> Result<String, SlugError> {
        if length == 0 || length > MAX_SLUG_LENGTH {
            return Err(SlugError::InvalidLength(length));
        }
        if max_attempts == 0 {
            return Err(SlugError::ZeroAttempts);
        }

        let mut last_candidate = String::new();

        for attempt in 1..=max_attempts {
            let candidate = random_slug(length);

            if !self.link_repository.exists_by_slug(&candidate).await? {
                return Ok(candidate);
            }

            tracing::debug!(slug = %candidate, attempt, "Slug collision");
            last_candidate = candidate;
        }

        tracing::warn!(
            attempts = max_attempts,
            last_candidate = %last_candidate,
            "Slug generation exhausted"
        );

        Err(SlugError::Exhausted {
            attempts: max_attempts,
            last_candidate,
        })
    }
}

/// Draws `length` independent, uniformly distributed symbols from
/// [`SLUG_ALPHABET`].
pub fn random_slug(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..SLUG_ALPHABET.len());
            SLUG_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_alphabet_has_62_distinct_symbols() {
        let distinct: HashSet<u8> = SLUG_ALPHABET.iter().copied().collect();
        assert_eq!(distinct.len(), 62);
        assert!(SLUG_ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_slug_shape() {
        for _ in 0..200 {
            let slug = random_slug(DEFAULT_SLUG_LENGTH);
            assert_eq!(slug.len(), 7);
            assert!(
                slug.bytes().all(|b| SLUG_ALPHABET.contains(&b)),
                "unexpected slug {slug}"
            );
        }
    }

    #[test]
    fn test_random_slug_produces_distinct_values() {
        let slugs: HashSet<String> = (0..1000).map(|_| random_slug(7)).collect();
        assert_eq!(slugs.len(), 1000);
    }

    #[tokio::test]
    async fn test_generate_returns_first_free_candidate() {
        let mut mock = MockLinkRepository::new();
        mock.expect_exists_by_slug()
            .times(1)
            .returning(|_| Ok(false));

        let generator = SlugGenerator::new(Arc::new(mock));
        let slug = generator.generate_default().await.unwrap();

        assert_eq!(slug.len(), DEFAULT_SLUG_LENGTH);
        assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_generate_retries_until_free() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let mut mock = MockLinkRepository::new();
        {
            let calls = calls.clone();
            let seen = seen.clone();
            mock.expect_exists_by_slug()
                .times(3)
                .returning(move |slug| {
                    seen.lock().unwrap().push(slug.to_string());
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    Ok(n < 2)
                });
        }

        let generator = SlugGenerator::new(Arc::new(mock));
        let slug = generator.generate_default().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(slug, seen[2]);
    }

    #[tokio::test]
    async fn test_generate_exhausts_budget() {
        let mut mock = MockLinkRepository::new();
        mock.expect_exists_by_slug()
            .times(3)
            .returning(|_| Ok(true));

        let generator = SlugGenerator::new(Arc::new(mock));
        let result = generator.generate(7, 3).await;

        match result {
            Err(SlugError::Exhausted {
                attempts,
                last_candidate,
            }) => {
                assert_eq!(attempts, 3);
                assert_eq!(last_candidate.len(), 7);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_honours_custom_length() {
        let mut mock = MockLinkRepository::new();
        mock.expect_exists_by_slug().returning(|_| Ok(false));

        let generator = SlugGenerator::new(Arc::new(mock));
        let slug = generator.generate(12, 1).await.unwrap();

        assert_eq!(slug.len(), 12);
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_parameters() {
        let mut mock = MockLinkRepository::new();
        mock.expect_exists_by_slug().times(0);

        let generator = SlugGenerator::new(Arc::new(mock));

        assert_eq!(
            generator.generate(0, 5).await,
            Err(SlugError::InvalidLength(0))
        );
        assert_eq!(
            generator.generate(33, 5).await,
            Err(SlugError::InvalidLength(33))
        );
        assert_eq!(generator.generate(7, 0).await, Err(SlugError::ZeroAttempts));
    }

    #[tokio::test]
    async fn test_generate_propagates_store_errors() {
        let mut mock = MockLinkRepository::new();
        mock.expect_exists_by_slug()
            .times(1)
            .returning(|_| Err(StoreError::unavailable("connection refused")));

        let generator = SlugGenerator::new(Arc::new(mock));
        let result = generator.generate_default().await;

        assert!(matches!(
            result,
            Err(SlugError::Store(StoreError::Unavailable(_)))
        ));
    }
}
