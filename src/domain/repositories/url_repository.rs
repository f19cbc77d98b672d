//! Repository trait for URL record data access.

use async_trait::async_trait;

use crate::domain::entities::UrlRecord;
use crate::error::AppError;

/// Repository interface for shortened URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::repository::CachedUrlRepository`] - durable store
///   fronted by a read-through cache
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] carrying the violated [`UniqueKey`] if
    /// the short code or the long URL is already stored.
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage
    /// failures.
    async fn add(&self, record: UrlRecord) -> Result<(), AppError>;

    /// Resolves a short code to its long URL.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(long_url))` if found
    /// - `Ok(None)` if no record has this short code
    async fn get_by_short_code(&self, short_code: &str) -> Result<Option<String>, AppError>;

    /// Finds the record for a long URL.
    ///
    /// Used to return the existing short code instead of creating a duplicate.
    async fn get_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError>;
}

/// A uniqueness constraint on stored records.
///
/// Constraint names match the `url` table in `migrations/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueKey {
    ShortCode,
    LongUrl,
}

impl UniqueKey {
    pub const fn constraint(self) -> &'static str {
        match self {
            Self::ShortCode => "url_short_url_key",
            Self::LongUrl => "url_long_url_key",
        }
    }

    pub fn from_constraint(name: &str) -> Option<Self> {
        [Self::ShortCode, Self::LongUrl]
            .into_iter()
            .find(|key| key.constraint() == name)
    }
}
