//! Structured error responses for HTTP handlers.
//!
//! A handler fails with an [`ErrorResponse`] built through one of five status
//! factories:
//! - [`ErrorResponse::invalid_request`] (200, errors in the body)
//! - [`ErrorResponse::bad_request`] (400)
//! - [`ErrorResponse::unauthorized`] (401)
//! - [`ErrorResponse::forbidden`] (403)
//! - [`ErrorResponse::not_found`] (404)
//!
//! Field errors go to the client as a JSON object. The optional log message set
//! with [`ErrorResponseBuilder::build_with_log`] is only ever written to the
//! server log.
#![warn(missing_docs)]

mod builder;
mod render;
mod response;
mod validation;

pub use builder::{BuildError, ErrorResponseBuilder};
pub use response::{ErrorResponse, FieldErrors, ServerResult};
