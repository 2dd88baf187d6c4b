//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the category item repository.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`logging`] | Structured logging with tracing |
//! | [`health`] | Search engine health checks |
//! | [`bootstrap`] | Wires configuration into repository and admin adapters |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`constants`] | Centralized configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::CategoryItemContext;
pub use error_ext::ErrorContext;
