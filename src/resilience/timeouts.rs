//! Timeout enforcement.
//!
//! # Responsibilities
//! - Put a deadline on the upstream exchange up to the response head
//! - Re-arm that deadline for every body frame while buffering
//! - Cancel the pending call when a deadline passes
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities; dropping the future aborts the call
//! - The body deadline is an idle deadline: a long media response that keeps
//!   sending data is never cut off, a stalled one is
//! - Timeout errors are distinct from other upstream errors
//! - Timed-out requests return 502 with a timeout-specific detail

use std::future::Future;
use std::time::Duration;

use axum::body::{Body, Bytes};
use http_body_util::BodyExt;

use crate::proxy::ProxyError;

/// Run `exchange`, failing with [`ProxyError::Timeout`] once `limit` elapses.
pub async fn enforce<F, T>(limit: Duration, exchange: F) -> Result<T, ProxyError>
where
    F: Future<Output = Result<T, ProxyError>>,
{
    match tokio::time::timeout(limit, exchange).await {
        Ok(result) => result,
        Err(_) => Err(ProxyError::Timeout),
    }
}

/// Buffer an upstream body, failing if no frame arrives within `idle`.
///
/// Trailers are dropped; only data frames are kept.
pub async fn collect_idle(idle: Duration, mut body: Body) -> Result<Bytes, ProxyError> {
    let mut collected = Vec::new();
    loop {
        let frame = match tokio::time::timeout(idle, body.frame()).await {
            Err(_) => return Err(ProxyError::Timeout),
            Ok(None) => break,
            Ok(Some(frame)) => frame.map_err(ProxyError::UpstreamBody)?,
        };
        if let Ok(data) = frame.into_data() {
            collected.extend_from_slice(&data);
        }
    }
    Ok(Bytes::from(collected))
}
