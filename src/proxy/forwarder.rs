//! The forwarding cycle: one inbound request in, one relayed or synthesized response out.

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::Request,
    response::{IntoResponse, Response},
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::config::{ProxyConfig, Upstream};
use crate::http::request::{request_id, upstream_target};
use crate::http::response;
use crate::proxy::ProxyError;
use crate::resilience::timeouts;
use crate::security::headers::forward_headers;

/// Forwards every request to the single configured upstream.
///
/// Cheap to clone: the HTTP client shares its connection pool between clones.
#[derive(Clone)]
pub struct Forwarder {
    upstream: Option<Upstream>,
    client: Client<HttpConnector, Body>,
    timeout: Duration,
}

impl Forwarder {
    pub fn new(config: &ProxyConfig) -> Self {
        // Redirects are never followed: the legacy client hands 3xx back as-is.
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Self {
            upstream: config.upstream.clone(),
            client,
            timeout: config.timeouts.upstream,
        }
    }

    /// Relay `request` upstream. Never fails: proxy-internal errors become JSON responses.
    pub async fn handle(&self, request: Request<Body>) -> Response {
        let request_id = request_id(request.headers()).to_owned();
        let method = request.method().clone();

        match self.forward(request, &request_id).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    method = %method,
                    error = %e,
                    "Proxy internal error"
                );
                e.into_response()
            }
        }
    }

    async fn forward(&self, request: Request<Body>, request_id: &str) -> Result<Response, ProxyError> {
        let upstream = self.upstream.as_ref().ok_or(ProxyError::MissingUpstream)?;

        let (parts, body) = request.into_parts();
        let target = upstream_target(upstream, &parts.uri)?;

        tracing::info!(
            request_id = %request_id,
            method = %parts.method,
            target = %target,
            "Forwarding request"
        );

        let headers = forward_headers(&parts.headers, upstream.host_header());
        let body = to_bytes(body, usize::MAX)
            .await
            .map_err(ProxyError::InboundBody)?;

        let mut outbound = Request::new(Body::from(body));
        *outbound.method_mut() = parts.method;
        *outbound.uri_mut() = target;
        *outbound.headers_mut() = headers;

        // Deadline up to the response head, then an idle deadline per body frame.
        let upstream_response = timeouts::enforce(self.timeout, async {
            Ok::<_, ProxyError>(self.client.request(outbound).await?)
        })
        .await?;

        let (parts, body) = upstream_response.into_parts();
        let body = timeouts::collect_idle(self.timeout, Body::new(body)).await?;

        tracing::debug!(
            request_id = %request_id,
            status = %parts.status,
            bytes = body.len(),
            "Relaying upstream response"
        );

        Ok(response::relay(parts, body))
    }
}
