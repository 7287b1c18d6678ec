//! Subscription transcoding subsystem.
//!
//! # Data Flow
//! ```text
//! raw body (bytes)
//!     → decode.rs (skip line breaks, re-pad, URL-safe base64)
//!     → rewrite.rs (drop empty lines, escape names after the first '#')
//!     → plain-text response body (bytes; the document need not be UTF-8)
//! ```
//!
//! Both steps are pure functions; nothing is shared between requests.

pub mod decode;
pub mod rewrite;

pub use decode::{decode, DecodeError, PaddingMode};
pub use rewrite::{query_escape, rewrite, rewrite_line};

/// Decode then rewrite a raw subscription body.
pub fn transcode(raw: &[u8], mode: PaddingMode) -> Result<Vec<u8>, DecodeError> {
    decode(raw, mode).map(|document| rewrite(&document))
}
