//! # catcount - Provider Implementations
//!
//! Adapters implementing the ports defined in `catcount-domain` against a
//! search engine.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Repository | `CategoryItemRepository` | `ElasticsearchCategoryItemRepository` |
//! | Index admin | `SearchIndexAdmin` | `ElasticsearchClient` |
//!
//! ## Usage
//!
//! ```ignore
//! use catcount_providers::elasticsearch::{ElasticsearchClient, ElasticsearchCategoryItemRepository};
//! use catcount_providers::http::HttpClientPool;
//!
//! let pool = HttpClientPool::new()?;
//! let client = ElasticsearchClient::new("http://localhost:9200", pool.client().clone())?;
//! let repo = ElasticsearchCategoryItemRepository::new(client, "category-item");
//! ```

// Re-export catcount-domain types commonly used with providers
pub use catcount_domain::error::{Error, Result};
pub use catcount_domain::ports::SearchIndexAdmin;
pub use catcount_domain::repositories::CategoryItemRepository;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client pool and configuration
pub mod http;

/// Elasticsearch adapters
///
/// Implements `CategoryItemRepository` and `SearchIndexAdmin` over the
/// Elasticsearch REST API.
pub mod elasticsearch;
