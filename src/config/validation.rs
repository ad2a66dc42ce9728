//! Semantic validation of the upstream base URL.

use axum::http::{HeaderValue, Uri};
use url::Url;

use crate::config::loader::ConfigError;
use crate::config::schema::Upstream;

impl Upstream {
    /// Validate `raw` and split out the pieces the forwarder needs.
    ///
    /// Only plain `http` is accepted: the upstream client carries no TLS stack.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUpstream {
            url: raw.to_owned(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "http" {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_owned()));
        }

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ConfigError::InvalidUpstream {
                url: raw.to_owned(),
                reason: "missing host".to_owned(),
            })?;

        // Url drops the port when it is the scheme default, same as a browser's `URL.host`.
        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        };

        let base = raw.trim_end_matches('/').to_owned();
        base.parse::<Uri>().map_err(|e| ConfigError::InvalidUpstream {
            url: raw.to_owned(),
            reason: e.to_string(),
        })?;

        let host_header =
            HeaderValue::from_str(&authority).map_err(|e| ConfigError::InvalidUpstream {
                url: raw.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            base,
            authority,
            host_header,
        })
    }
}
