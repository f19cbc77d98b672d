//! API route configuration.

use crate::api::handlers::{create_short_url_handler, get_long_url_handler, health_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// URL endpoints.
///
/// # Endpoints
///
/// - `POST /urls`              - Create (or fetch) the short code for a long URL
/// - `GET  /urls/{short_url}`  - Resolve a short code
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(create_short_url_handler))
        .route("/urls/{short_url}", get(get_long_url_handler))
}

/// Liveness and dependency checks.
///
/// - `GET /healthcheck` - Database and cache status
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/healthcheck", get(health_handler))
}
