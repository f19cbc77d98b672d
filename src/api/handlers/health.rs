//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use tokio::time::timeout;

use crate::api::dto::health::{CheckStatus, HealthChecks, PingResponse};
use crate::api::dto::response::ApiResponse;
use crate::state::AppState;

type HealthBody = Json<ApiResponse<PingResponse>>;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /healthcheck`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "data": { "result": true },
///   "meta": {
///     "version": "0.1.0",
///     "checks": {
///       "database": { "status": "ok", "message": "Connected" },
///       "cache": { "status": "ok", "message": "Connected" }
///     }
///   },
///   "errors": []
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<HealthBody, (StatusCode, HealthBody)> {
    let checks = HealthChecks {
        database: check_database(&state).await,
        cache: check_cache(&state).await,
    };

    let all_healthy = checks.database.is_ok() && checks.cache.is_ok();

    let response = ApiResponse::new(PingResponse {
        result: all_healthy,
    })
    .with_meta("version", json!(env!("CARGO_PKG_VERSION")))
    .with_meta("checks", json!(checks));

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match timeout(state.io_timeout, state.store.health_check()).await {
        Ok(true) => CheckStatus::ok("Connected"),
        Ok(false) => CheckStatus::error("Database connection failed"),
        Err(_) => CheckStatus::error("Database health check timed out"),
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    match timeout(state.io_timeout, state.cache.health_check()).await {
        Ok(true) => CheckStatus::ok("Connected"),
        Ok(false) => CheckStatus::error("Cache connection failed"),
        Err(_) => CheckStatus::error("Cache health check timed out"),
    }
}
