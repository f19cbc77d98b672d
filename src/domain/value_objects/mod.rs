//! Validated value objects.

pub mod long_url;

pub use long_url::{LongUrl, MAX_URL_LENGTH};
