use axum::http::StatusCode;
use thiserror::Error;

use crate::response::{ErrorResponse, FieldErrors};

/// Contract violations detected while finalizing an [`ErrorResponseBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A logged error was requested without a message to log.
    #[error("log message must not be empty")]
    EmptyLogMessage,
}

/// Accumulates field errors for an [`ErrorResponse`] with a fixed status.
///
/// Obtained from the status factories on [`ErrorResponse`]. Finalizing
/// consumes the builder.
#[derive(Debug, Clone)]
#[must_use = "an ErrorResponseBuilder does nothing until it is built"]
pub struct ErrorResponseBuilder {
    status: StatusCode,
    errors: FieldErrors,
}

impl ErrorResponseBuilder {
    pub(crate) fn new(status: StatusCode) -> Self {
        Self {
            status,
            errors: FieldErrors::new(),
        }
    }

    /// Adds an error for `field`, replacing any earlier message for it.
    pub fn with_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.insert(field.into(), message.into());
        self
    }

    /// Builds an error that is returned to the client without being logged.
    pub fn build(self) -> ErrorResponse {
        ErrorResponse::new(self.status, self.errors, None)
    }

    /// Builds an error that is returned to the client and logged by the server
    /// with `message`.
    ///
    /// # Panics
    /// Panics if `message` is empty or whitespace only. Use
    /// [`Self::try_build_with_log`] when the message comes from input.
    #[track_caller]
    pub fn build_with_log(self, message: impl Into<String>) -> ErrorResponse {
        match self.try_build_with_log(message) {
            Ok(err) => err,
            Err(err) => panic!("ErrorResponseBuilder::build_with_log: {err}"),
        }
    }

    /// Fallible form of [`Self::build_with_log`].
    pub fn try_build_with_log(
        self,
        message: impl Into<String>,
    ) -> Result<ErrorResponse, BuildError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(BuildError::EmptyLogMessage);
        }
        Ok(ErrorResponse::new(self.status, self.errors, Some(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::BuildError;
    use crate::ErrorResponse;

    #[test]
    fn invalid_request_with_field_error_is_silent() {
        let err = ErrorResponse::invalid_request()
            .with_error("email", "must be present")
            .build();

        assert_eq!(err.http_code(), 200);
        assert_eq!(err.errors().len(), 1);
        assert_eq!(
            err.errors().get("email").map(String::as_str),
            Some("must be present")
        );
        assert!(!err.should_log());
        assert_eq!(err.log_message(), None);
    }

    #[test]
    fn bad_request_with_log_keeps_message() {
        let err = ErrorResponse::bad_request().build_with_log("payload exceeded 10MB");

        assert_eq!(err.http_code(), 400);
        assert!(err.errors().is_empty());
        assert!(err.should_log());
        assert_eq!(err.log_message(), Some("payload exceeded 10MB"));
    }

    #[test]
    fn unauthorized_without_errors_is_empty() {
        let err = ErrorResponse::unauthorized().build();

        assert_eq!(err.http_code(), 401);
        assert!(err.errors().is_empty());
        assert!(!err.should_log());
    }

    #[test]
    fn repeated_field_keeps_last_message() {
        let err = ErrorResponse::not_found()
            .with_error("id", "no such record")
            .with_error("id", "record deleted")
            .build();

        assert_eq!(err.http_code(), 404);
        assert_eq!(err.errors().len(), 1);
        assert_eq!(
            err.errors().get("id").map(String::as_str),
            Some("record deleted")
        );
    }

    #[test]
    fn status_is_unaffected_by_number_of_errors() {
        let mut builder = ErrorResponse::forbidden();
        for i in 0..10 {
            builder = builder.with_error(format!("field_{i}"), "denied");
        }
        let err = builder.build_with_log("ten fields denied");

        assert_eq!(err.http_code(), 403);
        assert_eq!(err.errors().len(), 10);
    }

    #[test]
    fn call_order_only_affects_ordering_not_contents() {
        let a = ErrorResponse::invalid_request()
            .with_error("name", "too short")
            .with_error("email", "invalid")
            .build();
        let b = ErrorResponse::invalid_request()
            .with_error("email", "invalid")
            .with_error("name", "too short")
            .build();

        assert_eq!(a.errors(), b.errors());
        assert_eq!(a, b);

        let a_keys: Vec<_> = a.errors().keys().map(String::as_str).collect();
        assert_eq!(a_keys, ["name", "email"]);
    }

    #[test]
    fn try_build_with_log_rejects_blank_message() {
        let err = ErrorResponse::bad_request()
            .try_build_with_log("   ")
            .expect_err("blank log message must be rejected");
        assert_eq!(err, BuildError::EmptyLogMessage);

        let err = ErrorResponse::bad_request()
            .try_build_with_log("")
            .expect_err("empty log message must be rejected");
        assert_eq!(err, BuildError::EmptyLogMessage);
    }

    #[test]
    fn try_build_with_log_accepts_message() {
        let err = ErrorResponse::unauthorized()
            .with_error("token", "expired")
            .try_build_with_log("expired token presented")
            .expect("non-empty message must build");

        assert!(err.should_log());
        assert_eq!(err.log_message(), Some("expired token presented"));
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    #[should_panic(expected = "log message must not be empty")]
    fn build_with_log_panics_on_empty_message() {
        let _ = ErrorResponse::not_found().build_with_log("");
    }
}
