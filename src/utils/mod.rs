//! Utility functions shared across layers.
//!
//! - [`base62`] - Base-62 integer encoding
//! - [`code_generator`] - Short code derivation from record identifiers

pub mod base62;
pub mod code_generator;
