//! Elasticsearch Adapters
//!
//! | Type | Role |
//! |------|------|
//! | [`ElasticsearchClient`] | REST transport, implements `SearchIndexAdmin` |
//! | [`ElasticsearchCategoryItemRepository`] | Implements `CategoryItemRepository` |
//! | [`aggregation`] | Typed search request bodies |
//! | [`response`] | Typed search response bodies and bucket mapping |
//! | [`mapping`] | Fixed index mapping for category items |

pub mod aggregation;
mod client;
pub mod mapping;
mod repository;
pub mod response;

pub use client::ElasticsearchClient;
pub use repository::ElasticsearchCategoryItemRepository;
