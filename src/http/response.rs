//! Response handling and transformation.
//!
//! # Responsibilities
//! - Relay a buffered upstream response to the client unchanged
//! - Build the JSON bodies for proxy-internal failures
//!
//! # Design Decisions
//! - The upstream body is fully buffered before the response head is built,
//!   so a client never sees a half-written relay followed by an error
//! - Upstream headers are copied as-is, repeated values included

use axum::{
    body::{Body, Bytes},
    http::{response::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON body sent when the relay itself fails.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'a str>,
}

/// Rebuild the upstream response around its buffered body.
pub fn relay(parts: Parts, body: Bytes) -> Response {
    Response::from_parts(parts, Body::from(body))
}

/// Build a JSON error response.
pub fn json_error(status: StatusCode, error: &str, details: Option<&str>) -> Response {
    (status, Json(ErrorBody { error, details })).into_response()
}
