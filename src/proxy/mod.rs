//! Forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → forwarder.rs (target, headers, buffered body)
//!     → resilience::timeouts (deadline around the upstream exchange)
//!     → http::response::relay   on any upstream status
//!     → error.rs → JSON 500/502 on proxy-internal failure
//! ```

pub mod error;
pub mod forwarder;

pub use error::ProxyError;
pub use forwarder::Forwarder;
