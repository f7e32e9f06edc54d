use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::contacts::{
    create_contact, delete_contact, get_contact, list_contacts,
};
use crate::presentation::middleware::auth::token_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_contacts))
        .route("/{id}", get(get_contact));

    let protected = Router::new()
        .route("/", post(create_contact))
        .route("/{id}", delete(delete_contact))
        .layer(middleware::from_fn_with_state(state, token_auth_middleware));

    public.merge(protected)
}
