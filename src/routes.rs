//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /healthcheck`       - Health check: database and cache
//! - `POST /urls`              - Shorten a long URL
//! - `GET  /urls/{short_url}`  - Resolve a short code
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::health_routes())
        .merge(api::routes::url_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::InMemoryCache;
    use crate::infrastructure::persistence::InMemoryUrlStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn router() -> NormalizePath<Router> {
        let state = AppState::build(
            Arc::new(InMemoryUrlStore::new()),
            Arc::new(InMemoryCache::new()),
            Duration::from_secs(1),
        )
        .unwrap();
        app_router(state)
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let response = router()
            .oneshot(
                Request::get("/healthcheck/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
