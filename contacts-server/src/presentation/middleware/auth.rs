use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use error_response::ErrorResponse;

use crate::presentation::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AccessLevel {
    ReadOnly,
    Write,
}

/// Static bearer tokens and the access each one grants.
#[derive(Debug, Clone)]
pub(crate) struct TokenRegistry {
    write_token: String,
    readonly_token: String,
}

impl TokenRegistry {
    pub(crate) fn new(write_token: impl Into<String>, readonly_token: impl Into<String>) -> Self {
        Self {
            write_token: write_token.into(),
            readonly_token: readonly_token.into(),
        }
    }

    pub(crate) fn resolve(&self, token: &str) -> Option<AccessLevel> {
        if token == self.write_token {
            Some(AccessLevel::Write)
        } else if token == self.readonly_token {
            Some(AccessLevel::ReadOnly)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct AuthenticatedCaller {
    pub(crate) access: AccessLevel,
}

impl<S> FromRequestParts<S> for AuthenticatedCaller
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedCaller>()
            .copied()
            .ok_or_else(|| ErrorResponse::unauthorized().build())
    }
}

/// Caller whose token grants write access.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WriteAccess;

impl<S> FromRequestParts<S> for WriteAccess
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let caller = AuthenticatedCaller::from_request_parts(parts, state).await?;
        match caller.access {
            AccessLevel::Write => Ok(WriteAccess),
            AccessLevel::ReadOnly => Err(ErrorResponse::forbidden()
                .with_error("authorization", "token is read-only")
                .build()),
        }
    }
}

pub(crate) async fn token_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ErrorResponse> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            ErrorResponse::unauthorized()
                .with_error("authorization", "bearer token required")
                .build()
        })?;

    let token = parse_bearer(auth_header).ok_or_else(|| {
        ErrorResponse::unauthorized()
            .with_error("authorization", "expected 'Bearer <token>'")
            .build()
    })?;

    let access = state.tokens.resolve(token).ok_or_else(|| {
        ErrorResponse::unauthorized()
            .with_error("authorization", "invalid token")
            .build_with_log("rejected unknown bearer token")
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedCaller { access });

    Ok(next.run(request).await)
}

fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token)
}
