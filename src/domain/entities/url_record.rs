//! URL record entity representing a short code to long URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_objects::LongUrl;

/// A shortened URL with metadata.
///
/// Both `short_code` and `long_url` are unique across all records. Records are
/// created once and never mutated. Identity is the `id`.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub id: Uuid,
    pub short_code: String,
    pub long_url: LongUrl,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a fresh record with both timestamps set to now.
    pub fn new(id: Uuid, short_code: String, long_url: LongUrl) -> Self {
        let now = Utc::now();
        Self {
            id,
            short_code,
            long_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a record loaded from storage.
    pub fn from_parts(
        id: Uuid,
        short_code: String,
        long_url: LongUrl,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
            updated_at,
        }
    }
}

impl PartialEq for UrlRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for UrlRecord {}
