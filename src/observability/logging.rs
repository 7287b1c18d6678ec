//! Structured logging.
//!
//! `RUST_LOG` takes precedence; otherwise the level comes from config, and
//! `verboseLog` raises it to at least `debug`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::RelayConfig;

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(config: &RelayConfig) -> String {
    let level = match config.log_level.trim().to_ascii_lowercase().as_str() {
        "" => "info".to_string(),
        "info" | "warn" | "error" if config.verbose_log => "debug".to_string(),
        other => other.to_string(),
    };
    format!("sub_relay={level},tower_http={level}")
}

/// Install the global tracing subscriber. Call once, at startup.
pub fn init_logging(config: &RelayConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(config).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
