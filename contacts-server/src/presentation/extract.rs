use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use error_response::ErrorResponse;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has been deserialized and passed `validator` checks.
///
/// Unreadable bodies become a logged `bad_request`; validation failures become
/// a silent `invalid_request` listing the failing fields.
#[derive(Debug)]
pub(crate) struct ValidatedJson<T>(pub(crate) T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_body)?;
        value.validate()?;
        Ok(Self(value))
    }
}

fn reject_body(rejection: JsonRejection) -> ErrorResponse {
    ErrorResponse::bad_request()
        .with_error("body", rejection.body_text())
        .build_with_log(format!(
            "rejected request body ({}): {rejection}",
            rejection.status()
        ))
}

/// Numeric contact id taken from the path.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContactId(pub(crate) u64);

impl<S> FromRequestParts<S> for ContactId
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<u64>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| Self(id))
            .map_err(reject_id)
    }
}

fn reject_id(_rejection: PathRejection) -> ErrorResponse {
    ErrorResponse::bad_request()
        .with_error("id", "must be a non-negative integer")
        .build()
}
