//! Core domain entities.
//!
//! - [`UrlRecord`] - A shortened URL mapping

pub mod url_record;

pub use url_record::UrlRecord;
