//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Forwarder / server / lifecycle produce:
//!     → logging.rs (structured log events on stdout)
//!
//! Every forwarded request logs method and target URL;
//! every proxy-internal error logs its message.
//! ```

pub mod logging;
