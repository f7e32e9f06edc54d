use axum::{Json, Router, extract::State, routing::get};
use error_response::ServerResult;
use serde::Serialize;

use super::{AppState, routes};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .merge(routes::router(state.clone()))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
    contacts: usize,
}

async fn healthz(State(state): State<AppState>) -> ServerResult<Json<HealthzResponse>> {
    let contacts = state.contact_service.list_contacts().await?.len();
    Ok(Json(HealthzResponse {
        status: "ok",
        contacts,
    }))
}
