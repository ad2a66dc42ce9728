//! Configuration loading from the process environment.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::config::schema::{
    ListenerConfig, ProxyConfig, TimeoutConfig, Upstream, DEFAULT_PORT, DEFAULT_UPSTREAM_TIMEOUT,
    DEFAULT_UPSTREAM_URL,
};

pub const PORT_VAR: &str = "PORT";
pub const UPSTREAM_VAR: &str = "EMBY_SERVER_URL";
pub const TIMEOUT_VAR: &str = "EMBY_PROXY_TIMEOUT_MS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} has invalid value: {1}")]
    InvalidNumeric(String, String),

    #[error("EMBY_SERVER_URL is not a valid upstream URL ({url}): {reason}")]
    InvalidUpstream { url: String, reason: String },

    #[error("EMBY_SERVER_URL must use the http scheme, got {0}")]
    UnsupportedScheme(String),
}

impl ProxyConfig {
    /// Build the configuration from the current process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = env::vars()
            .filter(|(k, _)| matches!(k.as_str(), PORT_VAR | UPSTREAM_VAR | TIMEOUT_VAR))
            .collect();
        Self::parse(&vars)
    }

    pub(crate) fn parse(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = parse_port(vars, PORT_VAR, DEFAULT_PORT)?;
        let upstream = parse_upstream(vars)?;
        let upstream_timeout = parse_duration_ms(vars, TIMEOUT_VAR, DEFAULT_UPSTREAM_TIMEOUT)?;

        Ok(Self {
            listener: ListenerConfig::on_port(port),
            upstream,
            timeouts: TimeoutConfig {
                upstream: upstream_timeout,
            },
        })
    }
}

fn parse_upstream(vars: &HashMap<String, String>) -> Result<Option<Upstream>, ConfigError> {
    match vars.get(UPSTREAM_VAR).map(|s| s.trim()) {
        None => Upstream::parse(DEFAULT_UPSTREAM_URL).map(Some),
        Some("") => Ok(None),
        Some(raw) => Upstream::parse(raw).map(Some),
    }
}

fn parse_port(
    vars: &HashMap<String, String>,
    name: &str,
    default: u16,
) -> Result<u16, ConfigError> {
    match vars.get(name) {
        Some(val) => val
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumeric(name.to_owned(), val.clone())),
        None => Ok(default),
    }
}

fn parse_duration_ms(
    vars: &HashMap<String, String>,
    name: &str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match vars.get(name) {
        Some(val) => {
            let ms: u64 = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumeric(name.to_owned(), val.clone()))?;
            if ms == 0 {
                return Err(ConfigError::InvalidNumeric(name.to_owned(), val.clone()));
            }
            Ok(Duration::from_millis(ms))
        }
        None => Ok(default),
    }
}
