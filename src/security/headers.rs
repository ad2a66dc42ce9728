//! Outbound header filtering.
//!
//! # Responsibilities
//! - Point the `Host` header at the upstream so virtual-host routing works
//! - Strip headers injected by the hosting platform in front of the relay
//! - Leave everything else (cookies, auth, range, ...) untouched
//!
//! # Design Decisions
//! - Pure function over `HeaderMap`: no I/O, no shared state
//! - Repeated header values survive because the whole map is cloned

use axum::http::{header, HeaderMap, HeaderValue};

/// Headers removed before a request leaves for the upstream.
pub const STRIPPED_REQUEST_HEADERS: [&str; 5] = [
    "x-forwarded-for",
    "x-real-ip",
    "connection",
    "x-render-instance-id",
    "x-render-origin-server",
];

/// Derive the upstream-bound header map from the inbound one.
pub fn forward_headers(inbound: &HeaderMap, upstream_host: &HeaderValue) -> HeaderMap {
    let mut headers = inbound.clone();
    headers.insert(header::HOST, upstream_host.clone());
    for name in STRIPPED_REQUEST_HEADERS {
        headers.remove(name);
    }
    headers
}
