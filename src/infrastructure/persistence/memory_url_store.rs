//! In-memory implementation of the URL store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UniqueKey;
use crate::error::AppError;
use crate::infrastructure::persistence::UrlStore;

/// `DashMap`-backed store with the same uniqueness rules as the `url` table.
///
/// The long URL index is locked before the short code index on insert, so a
/// check-and-insert is atomic with respect to other inserts.
#[derive(Debug, Default)]
pub struct InMemoryUrlStore {
    by_short_code: DashMap<String, UrlRecord>,
    by_long_url: DashMap<String, String>,
}

impl InMemoryUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_short_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_short_code.is_empty()
    }
}

#[async_trait]
impl UrlStore for InMemoryUrlStore {
    async fn insert(&self, record: &UrlRecord) -> Result<(), AppError> {
        let long_entry = match self.by_long_url.entry(record.long_url.as_str().to_string()) {
            Entry::Occupied(_) => return Err(AppError::unique_violation(UniqueKey::LongUrl)),
            Entry::Vacant(entry) => entry,
        };

        match self.by_short_code.entry(record.short_code.clone()) {
            Entry::Occupied(_) => return Err(AppError::unique_violation(UniqueKey::ShortCode)),
            Entry::Vacant(entry) => {
                entry.insert(record.clone());
            }
        }

        long_entry.insert(record.short_code.clone());
        Ok(())
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .by_short_code
            .get(short_code)
            .map(|r| r.value().clone()))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError> {
        let Some(short_code) = self.by_long_url.get(long_url).map(|c| c.value().clone()) else {
            return Ok(None);
        };
        self.find_by_short_code(&short_code).await
    }

    async fn health_check(&self) -> bool {
        true
    }
}
