//! DTOs for URL creation and resolution.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct CreateShortUrlRequest {
    pub long_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateShortUrlResponse {
    pub short_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetLongUrlResponse {
    pub long_url: String,
}
