use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("validation failed for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("contact not found: {0}")]
    NotFound(u64),

    #[error("email already registered: {0}")]
    AlreadyExists(String),
}
