//! Proxy-internal failures and their HTTP mapping.
//!
//! Upstream application errors (any status the upstream returns) are not
//! represented here: those are relayed as ordinary responses.

use axum::http::{uri::InvalidUri, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::response::json_error;

pub const BAD_GATEWAY: &str = "Bad Gateway";
pub const TIMEOUT_DETAILS: &str = "The request to the upstream server timed out.";
pub const CONNECT_DETAILS: &str =
    "The proxy server encountered an error while trying to connect to the upstream Emby server.";

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Server configuration error: EMBY_SERVER_URL is not set.")]
    MissingUpstream,

    #[error("failed to read inbound request body: {0}")]
    InboundBody(#[source] axum::Error),

    #[error("invalid upstream target: {0}")]
    InvalidTarget(#[from] InvalidUri),

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    #[error("failed to read upstream response body: {0}")]
    UpstreamBody(#[source] axum::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingUpstream => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::InboundBody(_)
            | ProxyError::InvalidTarget(_)
            | ProxyError::Timeout
            | ProxyError::Upstream(_)
            | ProxyError::UpstreamBody(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ProxyError::MissingUpstream => json_error(status, &self.to_string(), None),
            ProxyError::Timeout => json_error(status, BAD_GATEWAY, Some(TIMEOUT_DETAILS)),
            ProxyError::InboundBody(_)
            | ProxyError::InvalidTarget(_)
            | ProxyError::Upstream(_)
            | ProxyError::UpstreamBody(_) => json_error(status, BAD_GATEWAY, Some(CONNECT_DETAILS)),
        }
    }
}
