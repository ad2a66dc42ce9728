//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, EMBY_SERVER_URL, ...)
//!     → loader.rs (collect & parse)
//!     → validation.rs (upstream URL checks)
//!     → ProxyConfig (validated, immutable)
//!     → handed to HttpServer / Forwarder constructors
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no runtime reconfiguration
//! - Every setting has a default so an empty environment still boots
//! - An explicitly empty upstream is not a startup error; each request
//!   answers 500 instead

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::ListenerConfig;
pub use schema::ProxyConfig;
pub use schema::TimeoutConfig;
pub use schema::Upstream;
