//! Write-side requests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::mediator::{MediatorError, Request, RequestHandler, RequestKind, Response};
use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Shorten a long URL, reusing the existing short code if there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateShortUrlCommand {
    pub long_url: String,
}

pub struct CreateShortUrlCommandHandler<R: UrlRepository> {
    url_service: Arc<UrlService<R>>,
}

impl<R: UrlRepository> CreateShortUrlCommandHandler<R> {
    pub fn new(url_service: Arc<UrlService<R>>) -> Self {
        Self { url_service }
    }
}

#[async_trait]
impl<R: UrlRepository + 'static> RequestHandler for CreateShortUrlCommandHandler<R> {
    fn kind(&self) -> RequestKind {
        RequestKind::CreateShortUrl
    }

    async fn handle(&self, request: Request) -> Result<Response, AppError> {
        let command = match request {
            Request::CreateShortUrl(command) => command,
            other => {
                return Err(MediatorError::UnexpectedRequest {
                    expected: self.kind(),
                    actual: other.kind(),
                }
                .into());
            }
        };

        let short_url = self
            .url_service
            .get_or_create_short_url(&command.long_url)
            .await?;

        Ok(Response::ShortUrl(short_url))
    }
}
