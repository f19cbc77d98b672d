//! Durable storage for URL records.
//!
//! # Stores
//!
//! - [`UrlStore`] - The durable store contract
//! - [`PgUrlStore`] - PostgreSQL implementation over the `url` table
//! - [`InMemoryUrlStore`] - `DashMap`-backed implementation for tests

pub mod memory_url_store;
pub mod pg_url_store;
pub mod store;

pub use memory_url_store::InMemoryUrlStore;
pub use pg_url_store::PgUrlStore;
pub use store::UrlStore;

#[cfg(test)]
pub use store::MockUrlStore;
