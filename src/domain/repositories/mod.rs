//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! [`crate::infrastructure`]. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! - [`UrlRepository`] - Storage and lookup of [`crate::domain::entities::UrlRecord`]
//! - [`UniqueKey`] - The uniqueness constraints a store enforces on insert

pub mod url_repository;

pub use url_repository::{UniqueKey, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
