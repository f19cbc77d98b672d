//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis, in-memory and no-op implementations)
//! - [`persistence`] - Durable store implementations (PostgreSQL, in-memory)
//! - [`repository`] - The cache-aside [`crate::domain::repositories::UrlRepository`]

pub mod cache;
pub mod persistence;
pub mod repository;
