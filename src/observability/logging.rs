//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Take the filter from `RUST_LOG`, falling back to a sane default
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Console output only; the hosting platform collects stdout

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "emby_relay=info,tower_http=info";

/// Install the global subscriber. Call once, before anything logs.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
