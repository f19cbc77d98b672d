//! Application layer: business services and request dispatch.
//!
//! Services coordinate repository calls and business rules. Commands and
//! queries are tagged [`mediator::Request`] variants routed through the
//! [`mediator::Mediator`] handler table to those services.
//!
//! # Modules
//!
//! - [`services`] - [`services::UrlService`], short code creation and resolution
//! - [`commands`] - Write-side requests and their handlers
//! - [`queries`] - Read-side requests and their handlers
//! - [`mediator`] - Request routing

pub mod commands;
pub mod mediator;
pub mod queries;
pub mod services;
