//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into mediator requests and formats
//! responses in the [`dto::response::ApiResponse`] envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
