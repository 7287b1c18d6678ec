//! Upstream subscription source.
//!
//! # Data Flow
//! ```text
//! RelayConfig (subUrl, proxyUrl, timeoutSecs)
//!     → fetcher.rs (client per request, optional forward proxy)
//!     → GET subUrl, status must be 200
//!     → raw body bytes, or FetchError (types.rs)
//! ```

pub mod fetcher;
pub mod types;

pub use fetcher::{fetch, Fetcher};
pub use types::{FetchError, FetchResult};
