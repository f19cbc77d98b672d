//! Durable store trait.

use async_trait::async_trait;

use crate::domain::entities::UrlRecord;
use crate::error::AppError;

/// The source of truth for URL records.
///
/// Supports point lookups by short code and by long URL, and inserts that are
/// durable once they return `Ok`. Implementations enforce uniqueness of both
/// columns and report violations with [`AppError::unique_violation`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    async fn insert(&self, record: &UrlRecord) -> Result<(), AppError>;

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError>;

    async fn health_check(&self) -> bool;
}
