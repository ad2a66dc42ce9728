//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request headers:
//!     → headers.rs (rewrite Host, strip platform headers)
//!     → Forwarder dispatches to upstream
//! ```
//!
//! # Design Decisions
//! - Nothing injected by the hosting platform reaches the upstream
//! - No authentication or rate limiting; the upstream owns both

pub mod headers;

pub use headers::{forward_headers, STRIPPED_REQUEST_HEADERS};
