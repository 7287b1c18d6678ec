//! Subscription fetcher.
//!
//! # Responsibilities
//! - Build an HTTP client routed through the forward proxy, if any
//! - Issue exactly one GET per call, no retries
//! - Map failures onto `FetchError`
//!
//! A fresh client is built per fetch, so a bad proxy string fails every
//! request with `InvalidProxyConfig` before any connection is attempted.

use bytes::Bytes;
use reqwest::{Client, Proxy, StatusCode};
use std::time::Duration;

use crate::config::RelayConfig;
use crate::upstream::types::{FetchError, FetchResult};

/// Fetches the subscription document from a fixed URL.
#[derive(Debug, Clone)]
pub struct Fetcher {
    url: String,
    proxy: Option<String>,
    timeout: Option<Duration>,
}

impl Fetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            proxy: None,
            timeout: None,
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(config.sub_url.trim())
            .with_proxy(config.proxy())
            .with_timeout(config.timeout())
    }

    /// Route the fetch through `proxy`. Empty or None means direct.
    pub fn with_proxy(mut self, proxy: Option<&str>) -> Self {
        self.proxy = proxy.filter(|p| !p.is_empty()).map(str::to_string);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Check the proxy string without touching the network.
    pub fn proxy_config(&self) -> FetchResult<Option<Proxy>> {
        let Some(raw) = &self.proxy else {
            return Ok(None);
        };

        let invalid = |reason: String| FetchError::InvalidProxyConfig {
            proxy: raw.clone(),
            reason,
        };
        let proxy_url = url::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        let proxy = Proxy::all(proxy_url).map_err(|e| invalid(e.to_string()))?;
        Ok(Some(proxy))
    }

    fn build_client(&self) -> FetchResult<Client> {
        let mut builder = match self.proxy_config()? {
            Some(proxy) => Client::builder().proxy(proxy),
            // Direct connection; proxy environment variables are ignored.
            None => Client::builder().no_proxy(),
        };
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    /// Fetch the raw subscription body.
    ///
    /// Succeeds only on status 200. The response is dropped (and its
    /// connection released) on every return path.
    pub async fn fetch(&self) -> FetchResult<Bytes> {
        let client = self.build_client()?;

        tracing::debug!(
            url = %self.url,
            proxy = self.proxy.as_deref().unwrap_or("direct"),
            "Fetching subscription"
        );

        let response = client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Upstream {
                status: status.to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(bytes = body.len(), "Subscription fetched");
        Ok(body)
    }
}

/// One-shot fetch of `url`, optionally through `proxy`.
pub async fn fetch(url: &str, proxy: Option<&str>) -> FetchResult<Bytes> {
    Fetcher::new(url).with_proxy(proxy).fetch().await
}
