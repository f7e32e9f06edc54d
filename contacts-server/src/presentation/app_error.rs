use error_response::ErrorResponse;

use crate::domain::error::DomainError;

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, message } => ErrorResponse::invalid_request()
                .with_error(field, message)
                .build(),
            DomainError::AlreadyExists(_) => ErrorResponse::invalid_request()
                .with_error("email", "already registered")
                .build(),
            DomainError::NotFound(_) => ErrorResponse::not_found()
                .with_error("id", "no such contact")
                .build(),
        }
    }
}
