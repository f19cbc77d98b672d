#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use short_url_service::api::routes::{health_routes, url_routes};
use short_url_service::infrastructure::cache::{
    CacheError, CacheResult, CacheService, InMemoryCache,
};
use short_url_service::infrastructure::persistence::{InMemoryUrlStore, PgUrlStore};
use short_url_service::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

pub const IO_TIMEOUT: Duration = Duration::from_secs(2);

/// State over in-memory store and cache, with handles to both for inspection.
pub struct TestContext {
    pub state: AppState,
    pub store: Arc<InMemoryUrlStore>,
    pub cache: Arc<InMemoryCache>,
}

pub fn create_test_state() -> TestContext {
    let store = Arc::new(InMemoryUrlStore::new());
    let cache = Arc::new(InMemoryCache::new());

    let state = AppState::build(store.clone(), cache.clone(), IO_TIMEOUT).unwrap();

    TestContext {
        state,
        store,
        cache,
    }
}

pub fn create_pg_test_state(pool: PgPool) -> (AppState, Arc<InMemoryCache>) {
    let store = Arc::new(PgUrlStore::new(Arc::new(pool)));
    let cache = Arc::new(InMemoryCache::new());

    let state = AppState::build(store, cache.clone(), IO_TIMEOUT).unwrap();

    (state, cache)
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(url_routes())
        .with_state(state)
}

/// Cache whose backend is unreachable.
pub struct DownCache;

#[async_trait]
impl CacheService for DownCache {
    async fn get_url(&self, _short_code: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn set_url(&self, _short_code: &str, _long_url: &str) -> CacheResult<()> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Cache whose health check never answers in time.
pub struct StalledCache;

#[async_trait]
impl CacheService for StalledCache {
    async fn get_url(&self, _short_code: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_url(&self, _short_code: &str, _long_url: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        tokio::time::sleep(Duration::from_secs(30)).await;
        true
    }
}
