//! Port Interfaces
//!
//! Contracts the infrastructure layer drives adapters through.

/// Search index administration port
pub mod index_admin;

pub use index_admin::{ClusterHealth, SearchIndexAdmin};
