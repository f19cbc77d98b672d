//! Short code creation and long URL resolution.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::UrlRecord;
use crate::domain::errors::UrlError;
use crate::domain::repositories::{UniqueKey, UrlRepository};
use crate::domain::value_objects::LongUrl;
use crate::error::AppError;
use crate::utils::code_generator::short_code_for;

/// Maximum number of fresh identifiers tried when short codes collide.
pub const MAX_CODE_ATTEMPTS: usize = 5;

/// Service for creating and resolving short codes.
///
/// Creation is idempotent: a long URL that is already stored returns its
/// existing short code.
pub struct UrlService<R: UrlRepository> {
    url_repository: Arc<R>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(url_repository: Arc<R>) -> Self {
        Self { url_repository }
    }

    /// Returns the short code for `long_url`, creating a record if needed.
    ///
    /// # Flow
    ///
    /// 1. Return the existing short code if the long URL is stored
    /// 2. Validate the URL
    /// 3. Derive a short code from a fresh random identifier
    /// 4. Persist the record
    ///
    /// # Concurrent creation
    ///
    /// When the insert conflicts on the long URL, another request stored it
    /// between steps 1 and 4; its short code is re-read and returned. When it
    /// conflicts on the short code, a new identifier is drawn, up to
    /// [`MAX_CODE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid.
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage failures.
    pub async fn get_or_create_short_url(&self, long_url: &str) -> Result<String, AppError> {
        if let Some(existing) = self.url_repository.get_by_long_url(long_url).await? {
            debug!(short_code = %existing.short_code, "Returning existing short code");
            return Ok(existing.short_code);
        }

        let long_url = LongUrl::new(long_url)?;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let id = Uuid::new_v4();
            let short_code = short_code_for(&id);
            let record = UrlRecord::new(id, short_code.clone(), long_url.clone());

            match self.url_repository.add(record).await {
                Ok(()) => {
                    info!(%short_code, "Created short code");
                    return Ok(short_code);
                }
                Err(e) => match e.conflicting_key() {
                    Some(UniqueKey::LongUrl) => {
                        debug!("Long URL stored concurrently, re-reading");
                        return self.existing_short_code(long_url.as_str(), e).await;
                    }
                    Some(UniqueKey::ShortCode) => {
                        warn!(%short_code, attempt, "Short code collision, retrying");
                    }
                    None => return Err(e),
                },
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this short code.
    pub async fn get_long_url(&self, short_code: &str) -> Result<String, AppError> {
        self.url_repository
            .get_by_short_code(short_code)
            .await?
            .ok_or_else(|| {
                UrlError::LongUrlNotFound {
                    short_code: short_code.to_string(),
                }
                .into()
            })
    }

    async fn existing_short_code(
        &self,
        long_url: &str,
        conflict: AppError,
    ) -> Result<String, AppError> {
        match self.url_repository.get_by_long_url(long_url).await? {
            Some(record) => Ok(record.short_code),
            None => Err(conflict),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::infrastructure::cache::InMemoryCache;
    use crate::infrastructure::persistence::InMemoryUrlStore;
    use crate::infrastructure::repository::CachedUrlRepository;
    use crate::utils::code_generator::MAX_SHORT_CODE_LENGTH;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn existing_record(code: &str, url: &str) -> UrlRecord {
        UrlRecord::new(Uuid::new_v4(), code.to_string(), LongUrl::new(url).unwrap())
    }

    fn in_memory_service() -> (UrlService<CachedUrlRepository>, Arc<InMemoryCache>) {
        let cache = Arc::new(InMemoryCache::new());
        let repo = CachedUrlRepository::new(Arc::new(InMemoryUrlStore::new()), cache.clone());
        (UrlService::new(Arc::new(repo)), cache)
    }

    #[tokio::test]
    async fn test_create_short_url_success() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_by_long_url()
            .withf(|url| url == "https://example.com/page")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_add()
            .withf(|record| record.long_url.as_str() == "https://example.com/page")
            .times(1)
            .returning(|_| Ok(()));

        let service = UrlService::new(Arc::new(repo));
        let code = service
            .get_or_create_short_url("https://example.com/page")
            .await
            .unwrap();

        assert!(!code.is_empty());
        assert!(code.len() <= MAX_SHORT_CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_create_returns_existing_code() {
        let mut repo = MockUrlRepository::new();
        let existing = existing_record("existing", "https://example.com");
        repo.expect_get_by_long_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_add().times(0);

        let service = UrlService::new(Arc::new(repo));
        let code = service
            .get_or_create_short_url("https://example.com")
            .await
            .unwrap();

        assert_eq!(code, "existing");
    }

    #[tokio::test]
    async fn test_create_invalid_url_is_validation_error() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_by_long_url().returning(|_| Ok(None));
        repo.expect_add().times(0);

        let service = UrlService::new(Arc::new(repo));

        for input in ["", "   ", "example.com", "ftp://example.com", "mailto:user@x.com"] {
            let err = service.get_or_create_short_url(input).await.unwrap_err();
            assert!(
                matches!(err, AppError::Validation { .. }),
                "expected validation error for {input:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_concurrent_insert_returns_winner_code() {
        let mut repo = MockUrlRepository::new();
        let winner = existing_record("winner", "https://example.com");
        let lookups = AtomicUsize::new(0);

        repo.expect_get_by_long_url()
            .times(2)
            .returning(move |_| match lookups.fetch_add(1, Ordering::SeqCst) {
                0 => Ok(None),
                _ => Ok(Some(winner.clone())),
            });
        repo.expect_add()
            .times(1)
            .returning(|_| Err(AppError::unique_violation(UniqueKey::LongUrl)));

        let service = UrlService::new(Arc::new(repo));
        let code = service
            .get_or_create_short_url("https://example.com")
            .await
            .unwrap();

        assert_eq!(code, "winner");
    }

    #[tokio::test]
    async fn test_short_code_collision_retries() {
        let mut repo = MockUrlRepository::new();
        let inserts = AtomicUsize::new(0);

        repo.expect_get_by_long_url().returning(|_| Ok(None));
        repo.expect_add()
            .times(2)
            .returning(move |_| match inserts.fetch_add(1, Ordering::SeqCst) {
                0 => Err(AppError::unique_violation(UniqueKey::ShortCode)),
                _ => Ok(()),
            });

        let service = UrlService::new(Arc::new(repo));
        assert!(
            service
                .get_or_create_short_url("https://example.com")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_short_code_collision_gives_up() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_by_long_url().returning(|_| Ok(None));
        repo.expect_add()
            .times(MAX_CODE_ATTEMPTS)
            .returning(|_| Err(AppError::unique_violation(UniqueKey::ShortCode)));

        let service = UrlService::new(Arc::new(repo));
        let err = service
            .get_or_create_short_url("https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_by_long_url()
            .returning(|_| Err(AppError::unavailable("Database unavailable", json!({}))));

        let service = UrlService::new(Arc::new(repo));
        let err = service
            .get_or_create_short_url("https://example.com")
            .await
            .unwrap_err();

        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_get_long_url_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_by_short_code()
            .withf(|code| code == "doesNotExist")
            .returning(|_| Ok(None));

        let service = UrlService::new(Arc::new(repo));
        let err = service.get_long_url("doesNotExist").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert!(err.to_string().contains("doesNotExist"));
    }

    #[tokio::test]
    async fn test_round_trip_and_idempotency() {
        let (service, _cache) = in_memory_service();

        let first = service
            .get_or_create_short_url("https://example.com/page")
            .await
            .unwrap();
        let second = service
            .get_or_create_short_url("https://example.com/page")
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(
            service.get_long_url(&first).await.unwrap(),
            "https://example.com/page"
        );
    }

    #[tokio::test]
    async fn test_distinct_urls_get_distinct_codes() {
        let (service, _cache) = in_memory_service();
        let mut codes = HashSet::new();

        for i in 0..50 {
            let url = format!("https://example.com/item/{i}");
            let code = service.get_or_create_short_url(&url).await.unwrap();
            assert_eq!(service.get_long_url(&code).await.unwrap(), url);
            codes.insert(code);
        }

        assert_eq!(codes.len(), 50);
    }

    #[tokio::test]
    async fn test_resolve_after_cache_cleared() {
        let (service, cache) = in_memory_service();
        let code = service
            .get_or_create_short_url("https://example.com/page")
            .await
            .unwrap();

        cache.clear();

        assert_eq!(
            service.get_long_url(&code).await.unwrap(),
            "https://example.com/page"
        );
        assert!(cache.contains(&code));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_creation_converges() {
        let (service, _cache) = in_memory_service();
        let service = Arc::new(service);

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .get_or_create_short_url("https://example.com/race")
                        .await
                })
            })
            .collect();

        let mut codes = HashSet::new();
        for handle in handles {
            codes.insert(handle.await.unwrap().unwrap());
        }

        assert_eq!(codes.len(), 1);
    }
}
