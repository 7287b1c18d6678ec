//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign or keep x-request-id)
//!     → handler.rs (fetch → decode → rewrite)
//!     → 200 text/plain, or 500 with the error text
//! ```

pub mod handler;
pub mod request;
pub mod server;

pub use request::{request_id, MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
