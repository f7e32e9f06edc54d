use std::sync::Arc;

use crate::application::contact_service::ContactService;
use crate::data::repositories::memory::InMemoryContactRepository;
use crate::presentation::middleware::auth::TokenRegistry;

pub(crate) mod app_error;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) contact_service: Arc<ContactService<InMemoryContactRepository>>,
    pub(crate) tokens: Arc<TokenRegistry>,
}

impl AppState {
    pub(crate) fn new(
        contact_service: Arc<ContactService<InMemoryContactRepository>>,
        tokens: Arc<TokenRegistry>,
    ) -> Self {
        Self {
            contact_service,
            tokens,
        }
    }
}
