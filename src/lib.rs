//! Subscription relay library.
//!
//! Serves `GET /`: fetch the upstream subscription (optionally through a
//! forward proxy), decode it from URL-safe base64, escape each entry's name
//! and return the result as plain text.

// Core pipeline
pub mod transcode;
pub mod upstream;

// Serving
pub mod error;
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::RelayConfig;
pub use error::RelayError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
