//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis cache implementation for fast URL lookups.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Errors are reported to the caller as [`CacheError::Operation`].
pub struct RedisCache {
    client: ConnectionManager,
    ttl_seconds: Option<u64>,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - Expiry applied to every entry; `None` stores entries
    ///   without expiry
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, ttl_seconds: Option<u64>) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: "url:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, short_code: &str) -> String {
        format!("{}{}", self.key_prefix, short_code)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        let url = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(|e| CacheError::Operation(format!("GET {}: {}", key, e)))?;

        match &url {
            Some(_) => debug!("Cache HIT: {}", short_code),
            None => debug!("Cache MISS: {}", short_code),
        }

        Ok(url)
    }

    async fn set_url(&self, short_code: &str, long_url: &str) -> CacheResult<()> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        let result = match self.ttl_seconds {
            Some(ttl) => conn.set_ex::<_, _, ()>(&key, long_url, ttl).await,
            None => conn.set::<_, _, ()>(&key, long_url).await,
        };

        result.map_err(|e| CacheError::Operation(format!("SET {}: {}", key, e)))?;
        debug!("Cache SET: {} (TTL: {:?})", short_code, self.ttl_seconds);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
