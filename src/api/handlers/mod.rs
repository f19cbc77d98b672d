//! HTTP request handlers for API endpoints.

pub mod health;
pub mod urls;

pub use health::health_handler;
pub use urls::{create_short_url_handler, get_long_url_handler};
