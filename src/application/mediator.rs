//! Request routing from the transport layer to application handlers.
//!
//! Requests are tagged variants of [`Request`]. The [`Mediator`] keeps one
//! handler per [`RequestKind`] and forwards each request to it. Wiring is
//! checked once at startup with [`Mediator::ensure_registered`].

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::application::commands::CreateShortUrlCommand;
use crate::application::queries::GetLongUrlQuery;
use crate::error::AppError;

/// Discriminant of a [`Request`], used as the handler table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    CreateShortUrl,
    GetLongUrl,
}

impl RequestKind {
    pub const ALL: [RequestKind; 2] = [RequestKind::CreateShortUrl, RequestKind::GetLongUrl];
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateShortUrl => f.write_str("CreateShortUrlCommand"),
            Self::GetLongUrl => f.write_str("GetLongUrlQuery"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Request {
    CreateShortUrl(CreateShortUrlCommand),
    GetLongUrl(GetLongUrlQuery),
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::CreateShortUrl(_) => RequestKind::CreateShortUrl,
            Self::GetLongUrl(_) => RequestKind::GetLongUrl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    ShortUrl(String),
    LongUrl(String),
}

#[derive(Debug, Error)]
pub enum MediatorError {
    #[error("Handler not registered for request type: {0}")]
    HandlerNotRegistered(RequestKind),

    #[error("Handler for {expected} received a {actual} request")]
    UnexpectedRequest {
        expected: RequestKind,
        actual: RequestKind,
    },

    #[error("Handler for {0} returned an unexpected response")]
    UnexpectedResponse(RequestKind),
}

impl From<MediatorError> for AppError {
    fn from(e: MediatorError) -> Self {
        AppError::internal(e.to_string(), json!({}))
    }
}

/// Handles exactly one [`RequestKind`].
#[async_trait]
pub trait RequestHandler: Send + Sync {
    fn kind(&self) -> RequestKind;

    async fn handle(&self, request: Request) -> Result<Response, AppError>;
}

#[derive(Default)]
pub struct Mediator {
    handlers: HashMap<RequestKind, Arc<dyn RequestHandler>>,
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for the kind it reports, replacing any previous one.
    pub fn register(mut self, handler: Arc<dyn RequestHandler>) -> Self {
        self.handlers.insert(handler.kind(), handler);
        self
    }

    /// Fails if any request kind has no handler.
    pub fn ensure_registered(&self) -> Result<(), MediatorError> {
        match RequestKind::ALL
            .into_iter()
            .find(|kind| !self.handlers.contains_key(kind))
        {
            Some(kind) => Err(MediatorError::HandlerNotRegistered(kind)),
            None => Ok(()),
        }
    }

    pub async fn send(&self, request: Request) -> Result<Response, AppError> {
        let kind = request.kind();
        let handler = self
            .handlers
            .get(&kind)
            .ok_or(MediatorError::HandlerNotRegistered(kind))?;
        handler.handle(request).await
    }

    pub async fn create_short_url(&self, long_url: impl Into<String>) -> Result<String, AppError> {
        let command = CreateShortUrlCommand {
            long_url: long_url.into(),
        };
        match self.send(Request::CreateShortUrl(command)).await? {
            Response::ShortUrl(short_url) => Ok(short_url),
            Response::LongUrl(_) => {
                Err(MediatorError::UnexpectedResponse(RequestKind::CreateShortUrl).into())
            }
        }
    }

    pub async fn get_long_url(&self, short_url: impl Into<String>) -> Result<String, AppError> {
        let query = GetLongUrlQuery {
            short_url: short_url.into(),
        };
        match self.send(Request::GetLongUrl(query)).await? {
            Response::LongUrl(long_url) => Ok(long_url),
            Response::ShortUrl(_) => {
                Err(MediatorError::UnexpectedResponse(RequestKind::GetLongUrl).into())
            }
        }
    }
}
