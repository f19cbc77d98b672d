//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::UrlRecord;
use crate::domain::value_objects::LongUrl;
use crate::error::AppError;
use crate::infrastructure::persistence::UrlStore;

/// A row of the `url` table.
#[derive(Debug, FromRow)]
struct UrlRow {
    id: Uuid,
    short_url: String,
    long_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UrlRow> for UrlRecord {
    type Error = AppError;

    fn try_from(row: UrlRow) -> Result<Self, Self::Error> {
        let long_url = LongUrl::new(row.long_url).map_err(|e| {
            AppError::internal(
                "Stored URL failed validation",
                json!({ "id": row.id, "reason": e.to_string() }),
            )
        })?;

        Ok(UrlRecord::from_parts(
            row.id,
            row.short_url,
            long_url,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL store for URL records.
///
/// Uniqueness of `short_url` and `long_url` is enforced by the table's
/// constraints; violations surface as [`AppError::Conflict`].
pub struct PgUrlStore {
    pool: Arc<PgPool>,
}

impl PgUrlStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlStore for PgUrlStore {
    async fn insert(&self, record: &UrlRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO url (id, long_url, short_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id)
        .bind(record.long_url.as_str())
        .bind(&record.short_code)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, short_url, long_url, created_at, updated_at
            FROM url
            WHERE short_url = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UrlRecord::try_from).transpose()
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, short_url, long_url, created_at, updated_at
            FROM url
            WHERE md5(long_url) = md5($1) AND long_url = $1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UrlRecord::try_from).transpose()
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
