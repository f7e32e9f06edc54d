use axum::Router;

use super::AppState;

pub(crate) mod contacts;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new().nest("/api/contacts", contacts::router(state))
}
