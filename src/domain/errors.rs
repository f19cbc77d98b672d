//! Domain-level errors raised by URL validation and lookup.

use thiserror::Error;

/// Failures that originate in the domain itself.
///
/// These are caller faults and are never retried. They are translated into
/// [`crate::error::AppError`] at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("URL is too long: {length} characters (maximum is {max_length})")]
    UrlTooLong { length: usize, max_length: usize },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Long URL not found for short URL: {short_code}")]
    LongUrlNotFound { short_code: String },
}

impl UrlError {
    pub(crate) fn invalid(url: &str, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}
