//! Request handling and transformation.
//!
//! # Responsibilities
//! - Build the upstream target from the fixed base and the inbound path+query
//! - Expose the request ID assigned by the middleware stack
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - No path rewriting: the target is plain concatenation
//! - Original request headers preserved; a filtered copy is forwarded

use axum::http::{uri::InvalidUri, HeaderMap, HeaderName, Uri};

use crate::config::Upstream;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Concatenate the upstream base with the inbound path and query.
pub fn upstream_target(upstream: &Upstream, inbound: &Uri) -> Result<Uri, InvalidUri> {
    let path_and_query = inbound
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    format!("{}{}", upstream.base(), path_and_query).parse()
}

/// Request ID set by `SetRequestIdLayer`, or `"unknown"` outside the middleware stack.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
