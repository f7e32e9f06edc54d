use std::sync::Arc;

use anyhow::Result;
use tracing::info;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::contact_service::ContactService;
use data::repositories::memory::InMemoryContactRepository;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;
use presentation::middleware::auth::TokenRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let contact_service = Arc::new(ContactService::new(InMemoryContactRepository::new()));
    let tokens = Arc::new(TokenRegistry::new(
        settings.api_token.clone(),
        settings.readonly_token.clone(),
    ));
    let state = AppState::new(contact_service, tokens);

    info!("starting contacts-server");
    server::run_http(&settings, state).await
}
