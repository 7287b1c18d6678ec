//! Command-line arguments and their merge onto the file configuration.

use clap::Parser;
use std::path::PathBuf;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::RelayConfig;
use crate::config::validation::validate_config;

#[derive(Debug, Default, Parser)]
#[command(name = "sub-relay")]
#[command(version, about = "Fetches a base64 subscription and re-encodes its node names", long_about = None)]
pub struct CliArgs {
    /// Subscription URL
    #[arg(long = "subUrl")]
    pub sub_url: Option<String>,

    /// Forward proxy URL for fetching the subscription
    #[arg(long = "proxyUrl")]
    pub proxy_url: Option<String>,

    /// HTTP listen address:port [default: 127.0.0.1:18888]
    #[arg(long = "listen")]
    pub listen: Option<String>,

    /// Path to a .json, .yaml/.yml or .toml config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log the decoded subscription
    #[arg(long = "verboseLog")]
    pub verbose_log: bool,

    /// Always append 4 - len % 4 padding characters
    #[arg(long = "legacyPadding")]
    pub legacy_padding: bool,

    /// Transport timeout for the subscription fetch
    #[arg(long = "timeoutSecs")]
    pub timeout_secs: Option<u64>,

    /// Log level when RUST_LOG is unset
    #[arg(long = "logLevel")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Override `config` with every argument that was given.
    pub fn apply(&self, config: &mut RelayConfig) {
        if let Some(sub_url) = &self.sub_url {
            config.sub_url = sub_url.clone();
        }
        if let Some(proxy_url) = &self.proxy_url {
            config.proxy_url = proxy_url.clone();
        }
        if let Some(listen) = &self.listen {
            config.listen_addr = listen.clone();
        }
        if self.verbose_log {
            config.verbose_log = true;
        }
        if self.legacy_padding {
            config.legacy_padding = true;
        }
        if self.timeout_secs.is_some() {
            config.timeout_secs = self.timeout_secs;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }

    /// Build the final configuration: file (if `--config` was given), then
    /// CLI overrides, then validation.
    pub fn resolve(&self) -> Result<RelayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RelayConfig::default(),
        };
        self.apply(&mut config);

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "sub-relay",
            "--subUrl",
            "https://example.com/sub",
            "--proxyUrl",
            "http://127.0.0.1:7890",
            "--listen",
            "0.0.0.0:18888",
            "--verboseLog",
        ])
        .unwrap();
        assert_eq!(args.sub_url.as_deref(), Some("https://example.com/sub"));
        assert_eq!(args.proxy_url.as_deref(), Some("http://127.0.0.1:7890"));
        assert_eq!(args.listen.as_deref(), Some("0.0.0.0:18888"));
        assert!(args.verbose_log);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_resolve_without_file() {
        let args = CliArgs {
            sub_url: Some("https://example.com/sub".into()),
            ..Default::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.sub_url, "https://example.com/sub");
        assert_eq!(config.listen_addr, "127.0.0.1:18888");
        assert!(config.proxy().is_none());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "subUrl: https://file.example.com/sub").unwrap();
        writeln!(file, "proxyUrl: http://127.0.0.1:7890").unwrap();
        writeln!(file, "listenAddr: 127.0.0.1:19999").unwrap();

        let args = CliArgs::try_parse_from([
            "sub-relay",
            "-c",
            file.path().to_str().unwrap(),
            "--subUrl",
            "https://cli.example.com/sub",
        ])
        .unwrap();
        let config = args.resolve().unwrap();

        assert_eq!(config.sub_url, "https://cli.example.com/sub");
        assert_eq!(config.proxy_url, "http://127.0.0.1:7890");
        assert_eq!(config.listen_addr, "127.0.0.1:19999");
    }

    #[test]
    fn test_resolve_requires_sub_url() {
        let err = CliArgs::default().resolve().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("subUrl is required"));
    }
}
