//! Read-side requests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::mediator::{MediatorError, Request, RequestHandler, RequestKind, Response};
use crate::application::services::UrlService;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Resolve a short code to its long URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetLongUrlQuery {
    pub short_url: String,
}

pub struct GetLongUrlQueryHandler<R: UrlRepository> {
    url_service: Arc<UrlService<R>>,
}

impl<R: UrlRepository> GetLongUrlQueryHandler<R> {
    pub fn new(url_service: Arc<UrlService<R>>) -> Self {
        Self { url_service }
    }
}

#[async_trait]
impl<R: UrlRepository + 'static> RequestHandler for GetLongUrlQueryHandler<R> {
    fn kind(&self) -> RequestKind {
        RequestKind::GetLongUrl
    }

    async fn handle(&self, request: Request) -> Result<Response, AppError> {
        let query = match request {
            Request::GetLongUrl(query) => query,
            other => {
                return Err(MediatorError::UnexpectedRequest {
                    expected: self.kind(),
                    actual: other.kind(),
                }
                .into());
            }
        };

        let long_url = self.url_service.get_long_url(&query.short_url).await?;

        Ok(Response::LongUrl(long_url))
    }
}
