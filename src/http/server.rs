//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a wildcard handler for every method and path
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until shutdown is signalled
//! - Hand each request to the Forwarder

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::lifecycle::shutdown;
use crate::proxy::Forwarder;

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Self {
        let forwarder = Forwarder::new(&config);
        let router = Self::build_router(forwarder);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(forwarder: Forwarder) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(forwarder)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires and in-flight requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = self.config.upstream.as_ref().map(|u| u.base()).unwrap_or("<unset>"),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::recv(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Wildcard handler: every method, every path.
async fn proxy_handler(State(forwarder): State<Forwarder>, request: Request<Body>) -> Response {
    forwarder.handle(request).await
}
