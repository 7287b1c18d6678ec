//! Fetch error definitions.

use thiserror::Error;

/// Errors that can occur while fetching the subscription.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured proxy could not be parsed or was rejected as a proxy.
    #[error("invalid proxy URL '{proxy}': {reason}")]
    InvalidProxyConfig { proxy: String, reason: String },

    /// Connection, TLS, timeout or body transfer failure.
    #[error("failed to fetch subscription: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with anything other than 200.
    #[error("server returned non-200 status: {status}")]
    Upstream { status: String },
}

impl FetchError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidProxyConfig { .. } => "invalid_proxy_config",
            FetchError::Transport(_) => "transport_error",
            FetchError::Upstream { .. } => "upstream_error",
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
