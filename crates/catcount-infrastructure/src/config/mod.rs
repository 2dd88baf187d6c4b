//! Configuration management
//!
//! Layered configuration: built-in defaults, then a TOML file, then
//! `CATCOUNT__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, ElasticsearchConfig, LoggingConfig};
