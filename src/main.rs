//! Emby relay
//!
//! Fronts an internal Emby server that is not reachable from the public
//! internet. Every request, whatever its method or path, is forwarded to
//! one fixed upstream and the answer is relayed back unchanged.
//!
//! ```text
//!                        ┌───────────────────────────────────────────┐
//!   Client Request       │                 RELAY                     │
//!   ─────────────────────┼─▶ http::server ─▶ proxy::Forwarder ───────┼──▶ Emby
//!                        │   (request id,    (target, headers,       │    upstream
//!   Client Response      │    tracing)        deadline, relay)       │
//!   ◀────────────────────┼── http::response ◀────────────────────────┼───
//!                        └───────────────────────────────────────────┘
//! ```
//!
//! Configuration comes from the environment: `PORT` (default 3000),
//! `EMBY_SERVER_URL`, `EMBY_PROXY_TIMEOUT_MS` and `RUST_LOG`.

use emby_relay::config::ProxyConfig;
use emby_relay::lifecycle::startup;
use emby_relay::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("emby-relay v{} starting", env!("CARGO_PKG_VERSION"));

    let config = ProxyConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
