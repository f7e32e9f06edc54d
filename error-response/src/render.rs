use axum::{
    Json,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::response::ErrorResponse;

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let (status, errors, log_message) = self.into_parts();

        if let Some(message) = log_message {
            warn!(status = status.as_u16(), fields = errors.len(), "{message}");
        }

        (status, Json(errors)).into_response()
    }
}
