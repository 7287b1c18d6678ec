//! Configuration schema definitions.
//!
//! Keys are camelCase so existing `v2sub-conf.{json,yml,toml}` files load
//! unchanged. Every field has a default to allow minimal configs.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::transcode::PaddingMode;

/// Default listen address for the relay endpoint.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:18888";

/// Root configuration for the relay.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelayConfig {
    /// Subscription URL fetched on every request.
    pub sub_url: String,

    /// Optional forward proxy for the outbound fetch. Empty means direct.
    pub proxy_url: String,

    /// Bind address for the HTTP endpoint (e.g., "127.0.0.1:18888").
    pub listen_addr: String,

    /// Log the decoded subscription before it is rewritten.
    pub verbose_log: bool,

    /// Pad with `4 - len % 4` characters even when the body is aligned.
    pub legacy_padding: bool,

    /// Transport timeout for the outbound fetch in seconds. None leaves the
    /// client default (no timeout).
    pub timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            sub_url: String::new(),
            proxy_url: String::new(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            verbose_log: false,
            legacy_padding: false,
            timeout_secs: None,
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

impl RelayConfig {
    /// Proxy URL, or None when the fetch should connect directly.
    pub fn proxy(&self) -> Option<&str> {
        let proxy = self.proxy_url.trim();
        if proxy.is_empty() {
            None
        } else {
            Some(proxy)
        }
    }

    pub fn padding_mode(&self) -> PaddingMode {
        if self.legacy_padding {
            PaddingMode::Legacy
        } else {
            PaddingMode::Aligned
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
