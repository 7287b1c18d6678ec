//! Configuration validation.
//!
//! Semantic checks only; serde handles syntax. All errors are collected
//! rather than stopping at the first one.

use std::net::SocketAddr;

use crate::config::schema::RelayConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("subUrl is required")]
    MissingSubUrl,

    #[error("subUrl '{url}' is not an absolute http(s) URL: {reason}")]
    InvalidSubUrl { url: String, reason: String },

    #[error("listenAddr '{0}' is not a valid socket address")]
    InvalidListenAddr(String),

    #[error("timeoutSecs must be greater than zero")]
    ZeroTimeout,

    #[error("metricsAddress '{0}' is not a valid socket address")]
    InvalidMetricsAddr(String),
}

pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let sub_url = config.sub_url.trim();
    if sub_url.is_empty() {
        errors.push(ValidationError::MissingSubUrl);
    } else {
        match url::Url::parse(sub_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ValidationError::InvalidSubUrl {
                url: sub_url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError::InvalidSubUrl {
                url: sub_url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    if config.listen_addr.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidListenAddr(config.listen_addr.clone()));
    }

    if config.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.metrics_enabled && config.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidMetricsAddr(config.metrics_address.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
