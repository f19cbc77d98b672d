//! Shared application state passed to all handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::commands::CreateShortUrlCommandHandler;
use crate::application::mediator::{Mediator, MediatorError};
use crate::application::queries::GetLongUrlQueryHandler;
use crate::application::services::url_service::UrlService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::UrlStore;
use crate::infrastructure::repository::CachedUrlRepository;

/// Handlers reach the URL service only through `mediator`. The store and
/// cache handles are kept for health checks, bounded by `io_timeout`.
#[derive(Clone)]
pub struct AppState {
    pub mediator: Arc<Mediator>,
    pub store: Arc<dyn UrlStore>,
    pub cache: Arc<dyn CacheService>,
    pub io_timeout: Duration,
}

impl AppState {
    pub fn new(
        mediator: Arc<Mediator>,
        store: Arc<dyn UrlStore>,
        cache: Arc<dyn CacheService>,
        io_timeout: Duration,
    ) -> Self {
        Self {
            mediator,
            store,
            cache,
            io_timeout,
        }
    }

    /// Wires repository, service, handlers and mediator over `store` and `cache`.
    ///
    /// # Errors
    ///
    /// Returns [`MediatorError::HandlerNotRegistered`] if a request kind is left
    /// without a handler.
    pub fn build(
        store: Arc<dyn UrlStore>,
        cache: Arc<dyn CacheService>,
        io_timeout: Duration,
    ) -> Result<Self, MediatorError> {
        let repository = Arc::new(
            CachedUrlRepository::new(store.clone(), cache.clone()).with_io_timeout(io_timeout),
        );
        let url_service = Arc::new(UrlService::new(repository));

        let mediator = Mediator::new()
            .register(Arc::new(CreateShortUrlCommandHandler::new(
                url_service.clone(),
            )))
            .register(Arc::new(GetLongUrlQueryHandler::new(url_service)));
        mediator.ensure_registered()?;

        Ok(Self::new(Arc::new(mediator), store, cache, io_timeout))
    }
}
