//! In-process cache backed by `DashMap`.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// Process-local `short_code -> long_url` cache without expiry.
///
/// Entries are never evicted implicitly; [`InMemoryCache::clear`] and
/// [`InMemoryCache::remove`] simulate eviction.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: DashMap<String, String>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, short_code: &str) -> bool {
        self.entries.contains_key(short_code)
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        let hit = self.entries.get(short_code).map(|e| e.value().clone());
        debug!(short_code, hit = hit.is_some(), "In-memory cache lookup");
        Ok(hit)
    }

    async fn set_url(&self, short_code: &str, long_url: &str) -> CacheResult<()> {
        self.entries
            .insert(short_code.to_string(), long_url.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
