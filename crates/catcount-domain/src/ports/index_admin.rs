use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cluster health as reported by the search engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterHealth {
    /// All shards allocated
    Green,
    /// Primary shards allocated, some replicas missing
    Yellow,
    /// At least one primary shard unallocated
    Red,
}

impl ClusterHealth {
    /// Returns the lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for ClusterHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusterHealth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "red" => Ok(Self::Red),
            other => Err(Error::io(format!("unknown cluster health status '{other}'"))),
        }
    }
}

/// Search Index Administration
///
/// Index lifecycle operations around the repository: creating the index with
/// its mapping, forcing a refresh so writes become searchable, and a trivial
/// liveness probe.
///
/// # Example
///
/// ```ignore
/// use catcount_domain::ports::SearchIndexAdmin;
///
/// admin.recreate_index("category-item", &mapping).await?;
/// // ... save items ...
/// admin.refresh("category-item").await?;
/// ```
#[async_trait]
pub trait SearchIndexAdmin: Send + Sync {
    /// Check if an index exists
    async fn index_exists(&self, index: &str) -> Result<bool>;

    /// Create an index from a full creation body (settings and mappings)
    async fn create_index(&self, index: &str, mapping: &serde_json::Value) -> Result<()>;

    /// Delete an index
    async fn delete_index(&self, index: &str) -> Result<()>;

    /// Make all writes to `index` visible to searches
    async fn refresh(&self, index: &str) -> Result<()>;

    /// Query the cluster health
    async fn health_check(&self) -> Result<ClusterHealth>;

    /// Name of the backing engine (e.g. "elasticsearch")
    fn provider_name(&self) -> &str;

    /// Create the index unless it already exists
    ///
    /// Returns `true` when the index was created by this call.
    async fn ensure_index(&self, index: &str, mapping: &serde_json::Value) -> Result<bool> {
        if self.index_exists(index).await? {
            return Ok(false);
        }
        self.create_index(index, mapping).await?;
        Ok(true)
    }

    /// Drop the index if present and create it again, empty
    async fn recreate_index(&self, index: &str, mapping: &serde_json::Value) -> Result<()> {
        if self.index_exists(index).await? {
            self.delete_index(index).await?;
        }
        self.create_index(index, mapping).await
    }
}
