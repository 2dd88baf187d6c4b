//! Provider Constants
//!
//! Constants specific to provider implementations. Index layout and
//! aggregation limits are domain constants and live in `catcount-domain`.

// ============================================================================
// ELASTICSEARCH CONSTANTS
// ============================================================================

/// Elasticsearch default URL
pub const ELASTICSEARCH_DEFAULT_URL: &str = "http://localhost:9200";

/// Provider name reported by the Elasticsearch adapters
pub const ELASTICSEARCH_PROVIDER_NAME: &str = "elasticsearch";

/// Document API path segment
pub const ES_ENDPOINT_DOC: &str = "_doc";

/// Search API path segment
pub const ES_ENDPOINT_SEARCH: &str = "_search";

/// Refresh API path segment
pub const ES_ENDPOINT_REFRESH: &str = "_refresh";

/// Cluster API path segment
pub const ES_ENDPOINT_CLUSTER: &str = "_cluster";

/// Cluster health path segment (under `_cluster`)
pub const ES_ENDPOINT_HEALTH: &str = "health";

/// Keyword field type used by the category item mapping
pub const ES_TYPE_KEYWORD: &str = "keyword";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client maximum idle connections per host
pub const HTTP_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP client idle connection timeout in seconds
pub const HTTP_CLIENT_IDLE_TIMEOUT_SECS: u64 = 90;

/// HTTP TCP keep-alive interval in seconds
pub const HTTP_KEEPALIVE_SECS: u64 = 60;
