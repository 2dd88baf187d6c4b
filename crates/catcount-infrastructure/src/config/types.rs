//! Configuration types

use crate::constants::{DEFAULT_ELASTICSEARCH_TIMEOUT_SECS, DEFAULT_LOG_LEVEL};
use catcount_domain::constants::INDEX_CATEGORY_ITEM;
use catcount_providers::constants::{ELASTICSEARCH_DEFAULT_URL, HTTP_MAX_IDLE_PER_HOST};
use catcount_providers::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search engine connection
    pub elasticsearch: ElasticsearchConfig,
    /// Logging
    pub logging: LoggingConfig,
}

/// Elasticsearch connection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticsearchConfig {
    /// Cluster URL including scheme and port
    pub url: String,
    /// Index holding category items
    pub index: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Basic auth user name
    pub username: Option<String>,
    /// Basic auth password; requires `username`
    pub password: Option<String>,
    /// Maximum idle pooled connections
    pub max_idle_per_host: usize,
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            url: ELASTICSEARCH_DEFAULT_URL.to_string(),
            index: INDEX_CATEGORY_ITEM.to_string(),
            timeout_secs: DEFAULT_ELASTICSEARCH_TIMEOUT_SECS,
            username: None,
            password: None,
            max_idle_per_host: HTTP_MAX_IDLE_PER_HOST,
        }
    }
}

impl ElasticsearchConfig {
    /// HTTP client settings derived from this configuration
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            max_idle_per_host: self.max_idle_per_host,
            timeout: Duration::from_secs(self.timeout_secs),
            ..HttpClientConfig::default()
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
