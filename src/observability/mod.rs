//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handler and fetcher produce:
//!     → logging.rs (structured log events, request ID as a field)
//!     → metrics.rs (outcome counters, latency histogram)
//!
//! Consumers:
//!     → stdout (tracing fmt layer)
//!     → Prometheus scrape endpoint (only when metricsEnabled)
//! ```

pub mod logging;
pub mod metrics;
