use axum::http::StatusCode;
use indexmap::IndexMap;
use thiserror::Error;

use crate::builder::ErrorResponseBuilder;

/// Field name to client-facing message, in insertion order.
pub type FieldErrors = IndexMap<String, String>;

/// Result type for handlers that fail with an [`ErrorResponse`].
pub type ServerResult<T> = Result<T, ErrorResponse>;

/// An error a handler returns instead of a successful response.
///
/// Carries the HTTP status, the field errors shown to the client and, for
/// logged errors, an internal message that is never sent to the client.
/// Values are created only through the status factories and are immutable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}{}", log_suffix(.log_message))]
pub struct ErrorResponse {
    status: StatusCode,
    errors: FieldErrors,
    log_message: Option<String>,
}

impl ErrorResponse {
    /// Something invalid but not unexpected about the request, such as a
    /// missing or malformed field in the body or query.
    ///
    /// Responds with `200 OK` and the errors in the body. Clients detect the
    /// failure from the body, not the status.
    pub fn invalid_request() -> ErrorResponseBuilder {
        ErrorResponseBuilder::new(StatusCode::OK)
    }

    /// `400 Bad Request`: malformed syntax, oversized payload, invalid framing.
    pub fn bad_request() -> ErrorResponseBuilder {
        ErrorResponseBuilder::new(StatusCode::BAD_REQUEST)
    }

    /// `401 Unauthorized`: authentication is required and has failed or has
    /// not been provided.
    pub fn unauthorized() -> ErrorResponseBuilder {
        ErrorResponseBuilder::new(StatusCode::UNAUTHORIZED)
    }

    /// `403 Forbidden`: the request was valid but the caller lacks permission.
    pub fn forbidden() -> ErrorResponseBuilder {
        ErrorResponseBuilder::new(StatusCode::FORBIDDEN)
    }

    /// `404 Not Found`: the resource does not exist or its existence is not
    /// disclosed.
    pub fn not_found() -> ErrorResponseBuilder {
        ErrorResponseBuilder::new(StatusCode::NOT_FOUND)
    }

    pub(crate) fn new(
        status: StatusCode,
        errors: FieldErrors,
        log_message: Option<String>,
    ) -> Self {
        Self {
            status,
            errors,
            log_message,
        }
    }

    /// Numeric HTTP status code.
    pub fn http_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// HTTP status to set on the outgoing response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Field errors to return to the client.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the server should log this error.
    pub fn should_log(&self) -> bool {
        self.log_message.is_some()
    }

    /// Internal description for the server log. `Some` iff [`Self::should_log`].
    pub fn log_message(&self) -> Option<&str> {
        self.log_message.as_deref()
    }

    pub(crate) fn into_parts(self) -> (StatusCode, FieldErrors, Option<String>) {
        (self.status, self.errors, self.log_message)
    }
}

fn log_suffix(log_message: &Option<String>) -> String {
    match log_message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}
