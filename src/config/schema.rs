//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;

/// Upstream used when `EMBY_SERVER_URL` is not present in the environment.
pub const DEFAULT_UPSTREAM_URL: &str = "http://ipv6.863325.xyz:9096";

/// Listen port used when `PORT` is not present in the environment.
pub const DEFAULT_PORT: u16 = 3000;

/// Upstream deadline: to the response head, then between body frames.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_millis(9000);

/// Root configuration for the relay.
///
/// [`ProxyConfig::from_env`] is the production constructor; the two below
/// build the configured and the unset-upstream states directly.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream media server. `None` means it was configured empty.
    pub upstream: Option<Upstream>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

impl ProxyConfig {
    /// Config pointing at `upstream` with default listener and timeouts.
    pub fn with_upstream(upstream: Upstream) -> Self {
        Self {
            listener: ListenerConfig::default(),
            upstream: Some(upstream),
            timeouts: TimeoutConfig::default(),
        }
    }

    /// Config with the upstream explicitly unset; every request answers 500.
    pub fn without_upstream() -> Self {
        Self {
            listener: ListenerConfig::default(),
            upstream: None,
            timeouts: TimeoutConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address, always on all interfaces.
    pub bind_address: SocketAddr,
}

impl ListenerConfig {
    pub fn on_port(port: u16) -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self::on_port(DEFAULT_PORT)
    }
}

/// Timeout configuration for upstream calls.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Deadline up to the response head, then the idle limit between body frames.
    pub upstream: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            upstream: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}

/// A validated upstream base URL.
///
/// Built through [`Upstream::parse`], which guarantees an `http` scheme and a host.
#[derive(Debug, Clone)]
pub struct Upstream {
    /// Base string with any trailing `/` removed; request paths are appended to it.
    pub(crate) base: String,

    /// `host[:port]` as it must appear in the outbound `Host` header.
    pub(crate) authority: String,

    pub(crate) host_header: HeaderValue,
}

impl Upstream {
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn host_header(&self) -> &HeaderValue {
        &self.host_header
    }
}
