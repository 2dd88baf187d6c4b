//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "catcount.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "catcount";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "CATCOUNT";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// ELASTICSEARCH CONSTANTS
// ============================================================================

/// Default request timeout in seconds
pub const DEFAULT_ELASTICSEARCH_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CATCOUNT_LOG";

// ============================================================================
// HEALTH CONSTANTS
// ============================================================================

/// Name of the search engine health check
pub const HEALTH_CHECK_SEARCH_ENGINE: &str = "search_engine";
