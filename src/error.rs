//! Application error type and its HTTP mapping.
//!
//! Every layer below the HTTP boundary returns [`AppError`]. The variants keep
//! domain faults (validation, not found) apart from infrastructure faults
//! (unavailable, internal) so callers can branch on them.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::api::dto::response::ApiResponse;
use crate::domain::errors::UrlError;
use crate::domain::repositories::UniqueKey;

const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";
const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// Transient infrastructure failure (unreachable store, timeout).
    #[error("{message}")]
    Unavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Conflict raised when inserting a record that violates `key`.
    pub fn unique_violation(key: UniqueKey) -> Self {
        Self::conflict(
            "Unique constraint violation",
            json!({ "constraint": key.constraint() }),
        )
    }

    /// Returns the violated key if this is a uniqueness conflict.
    pub fn conflicting_key(&self) -> Option<UniqueKey> {
        match self {
            Self::Conflict { details, .. } => details
                .get("constraint")
                .and_then(Value::as_str)
                .and_then(UniqueKey::from_constraint),
            _ => None,
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

impl From<UrlError> for AppError {
    fn from(e: UrlError) -> Self {
        let message = e.to_string();
        match e {
            UrlError::EmptyUrl => Self::bad_request(message, json!({ "reason": "empty" })),
            UrlError::UrlTooLong { length, max_length } => Self::bad_request(
                message,
                json!({ "length": length, "max_length": max_length }),
            ),
            UrlError::InvalidUrl { url, reason } => {
                Self::bad_request(message, json!({ "url": url, "reason": reason }))
            }
            UrlError::LongUrlNotFound { short_code } => {
                Self::not_found(message, json!({ "short_url": short_code }))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message, .. } => (StatusCode::CONFLICT, message),
            AppError::Unavailable { message, details } => {
                tracing::error!(%message, %details, "Infrastructure unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    UNAVAILABLE_MESSAGE.to_string(),
                )
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        if let Some(key) = db.constraint().and_then(UniqueKey::from_constraint) {
            return AppError::unique_violation(key);
        }
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => AppError::unavailable(
            "Database unavailable",
            json!({ "reason": e.to_string() }),
        ),
        _ => AppError::internal("Database error", json!({ "reason": e.to_string() })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_errors_map_to_bad_request_variant() {
        let err: AppError = UrlError::UrlTooLong {
            length: 2049,
            max_length: 2048,
        }
        .into();

        let AppError::Validation { message, details } = err else {
            panic!("expected validation error");
        };
        assert!(message.contains("2049"));
        assert_eq!(details["length"], 2049);
        assert_eq!(details["max_length"], 2048);
    }

    #[test]
    fn test_not_found_maps_to_not_found_variant() {
        let err: AppError = UrlError::LongUrlNotFound {
            short_code: "doesNotExist".to_string(),
        }
        .into();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Long URL not found for short URL: doesNotExist"
        );
    }

    #[test]
    fn test_conflicting_key() {
        let err = AppError::unique_violation(UniqueKey::LongUrl);
        assert_eq!(err.conflicting_key(), Some(UniqueKey::LongUrl));

        let other = AppError::conflict("Other", json!({}));
        assert_eq!(other.conflicting_key(), None);
        assert_eq!(AppError::internal("x", json!({})).conflicting_key(), None);
    }

    #[test]
    fn test_pool_timeout_is_transient() {
        assert!(map_sqlx_error(sqlx::Error::PoolTimedOut).is_transient());
        assert!(!map_sqlx_error(sqlx::Error::RowNotFound).is_transient());
    }

    #[tokio::test]
    async fn test_not_found_response_body() {
        let response = AppError::not_found("Long URL not found for short URL: x", json!({}))
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["data"], json!({}));
        assert_eq!(json["errors"][0], "Long URL not found for short URL: x");
    }

    #[tokio::test]
    async fn test_internal_response_hides_details() {
        let response = AppError::internal(
            "Database error",
            json!({ "reason": "password authentication failed" }),
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["errors"][0], INTERNAL_MESSAGE);
        assert!(!json.to_string().contains("password"));
    }

    #[tokio::test]
    async fn test_unavailable_response_status() {
        let response = AppError::unavailable("Store timed out", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
