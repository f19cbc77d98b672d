//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Every response
//! body is wrapped in [`response::ApiResponse`].

pub mod health;
pub mod response;
pub mod url;
