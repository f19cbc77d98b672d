//! Domain layer containing the URL record, its value objects and the
//! repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - The [`entities::UrlRecord`] entity
//! - [`value_objects`] - Validated values such as [`value_objects::LongUrl`]
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Domain-level failures (validation, not found)
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits are implemented in [`crate::infrastructure`];
//! business logic lives in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;
