//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI arguments (cli.rs)
//!     → optional config file (loader.rs, json/yaml/toml by extension)
//!     → CLI overrides applied on top
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with every request handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; nothing reloads it at runtime
//! - All fields have defaults to allow minimal configs
//! - A bad `proxyUrl` is a per-request failure, not a startup failure

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::CliArgs;
pub use loader::{load_config, ConfigError};
pub use schema::RelayConfig;
pub use validation::{validate_config, ValidationError};
