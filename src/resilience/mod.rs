//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to upstream:
//!     → timeouts.rs (enforce the upstream deadline)
//!     → on failure: surfaced once as 502, never retried
//! ```
//!
//! # Design Decisions
//! - Every upstream call has a deadline
//! - No retries and no circuit breaking: there is exactly one upstream

pub mod timeouts;
