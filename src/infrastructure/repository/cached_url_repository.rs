//! Cache-aside URL repository.
//!
//! The durable store is the source of truth. The cache only accelerates the
//! short code to long URL direction:
//!
//! - **add**: store first, then cache; a failed cache write is logged and ignored
//! - **get_by_short_code**: cache, then store on miss, repopulating the cache
//! - **get_by_long_url**: store only, the cache has no long URL index
//!
//! Every store and cache call is bounded by the configured I/O timeout.

use async_trait::async_trait;
use metrics::counter;
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheError, CacheService};
use crate::infrastructure::persistence::UrlStore;

/// Default bound on a single store or cache call.
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(2);

pub struct CachedUrlRepository {
    store: Arc<dyn UrlStore>,
    cache: Arc<dyn CacheService>,
    io_timeout: Duration,
}

impl CachedUrlRepository {
    pub fn new(store: Arc<dyn UrlStore>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            store,
            cache,
            io_timeout: DEFAULT_IO_TIMEOUT,
        }
    }

    pub fn with_io_timeout(mut self, io_timeout: Duration) -> Self {
        self.io_timeout = io_timeout;
        self
    }

    /// Runs a store call under the I/O timeout.
    async fn store_call<T, F>(&self, operation: &'static str, call: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        match tokio::time::timeout(self.io_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AppError::unavailable(
                "Store operation timed out",
                json!({
                    "operation": operation,
                    "timeout_ms": self.io_timeout.as_millis() as u64,
                }),
            )),
        }
    }

    /// Runs a cache call under the I/O timeout.
    async fn cache_call<T, F>(&self, call: F) -> Result<T, CacheError>
    where
        F: Future<Output = Result<T, CacheError>>,
    {
        tokio::time::timeout(self.io_timeout, call)
            .await
            .unwrap_or_else(|_| {
                Err(CacheError::Operation(format!(
                    "timed out after {}ms",
                    self.io_timeout.as_millis()
                )))
            })
    }

    /// Writes a mapping into the cache, logging and swallowing failures.
    async fn populate_cache(&self, short_code: &str, long_url: &str) {
        if let Err(e) = self
            .cache_call(self.cache.set_url(short_code, long_url))
            .await
        {
            counter!("url_cache_errors_total", "operation" => "set").increment(1);
            warn!(short_code, error = %e, "Failed to cache URL mapping");
        }
    }
}

#[async_trait]
impl UrlRepository for CachedUrlRepository {
    async fn add(&self, record: UrlRecord) -> Result<(), AppError> {
        self.store_call("insert", self.store.insert(&record)).await?;

        self.populate_cache(&record.short_code, record.long_url.as_str())
            .await;

        debug!(short_code = %record.short_code, "Stored URL record");
        Ok(())
    }

    async fn get_by_short_code(&self, short_code: &str) -> Result<Option<String>, AppError> {
        match self.cache_call(self.cache.get_url(short_code)).await {
            Ok(Some(long_url)) => {
                counter!("url_cache_hits_total").increment(1);
                debug!(short_code, "Cache HIT");
                return Ok(Some(long_url));
            }
            Ok(None) => {
                counter!("url_cache_misses_total").increment(1);
                debug!(short_code, "Cache MISS");
            }
            Err(e) => {
                counter!("url_cache_errors_total", "operation" => "get").increment(1);
                warn!(short_code, error = %e, "Cache read failed, falling back to store");
            }
        }

        let record = self
            .store_call("find_by_short_code", self.store.find_by_short_code(short_code))
            .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        let long_url = record.long_url.into_inner();
        self.populate_cache(short_code, &long_url).await;
        Ok(Some(long_url))
    }

    async fn get_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError> {
        self.store_call("find_by_long_url", self.store.find_by_long_url(long_url))
            .await
    }
}
