//! Handlers for short URL creation and resolution.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::response::ApiResponse;
use crate::api::dto::url::{CreateShortUrlRequest, CreateShortUrlResponse, GetLongUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short code for a long URL.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "data": { "short_url": "4hQ2bXk9" }, "meta": {}, "errors": [] }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or the URL is invalid.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CreateShortUrlResponse>>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            rejection.body_text(),
            json!({ "status": rejection.status().as_u16() }),
        )
    })?;

    let short_url = state.mediator.create_short_url(payload.long_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(CreateShortUrlResponse { short_url })),
    ))
}

/// Resolves a short code to its long URL.
///
/// # Endpoint
///
/// `GET /urls/{short_url}`
///
/// # Response
///
/// ```json
/// { "data": { "long_url": "https://example.com/page" }, "meta": {}, "errors": [] }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn get_long_url_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<GetLongUrlResponse>>, AppError> {
    let long_url = state.mediator.get_long_url(short_url).await?;

    Ok(Json(ApiResponse::new(GetLongUrlResponse { long_url })))
}
