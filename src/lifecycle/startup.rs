//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener from the validated configuration
//! - Install signal handling
//! - Run the HTTP server until shutdown
//!
//! # Design Decisions
//! - Fail fast: a bind error is fatal
//! - A missing upstream is not fatal; requests answer 500 instead

use tokio::net::TcpListener;

use crate::config::ProxyConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};

/// Bind, serve, and return once the server has drained after a signal.
pub async fn run(config: ProxyConfig) -> Result<(), std::io::Error> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_timeout_ms = config.timeouts.upstream.as_millis() as u64,
        "Configuration loaded"
    );

    if config.upstream.is_none() {
        tracing::warn!("EMBY_SERVER_URL is empty; every request will answer 500");
    }

    let listener = TcpListener::bind(config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Emby proxy server is listening"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_handler(shutdown);

    HttpServer::new(config).run(listener, server_shutdown).await
}
