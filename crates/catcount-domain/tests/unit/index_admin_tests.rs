//! Unit tests for the index administration port defaults

use async_trait::async_trait;
use catcount_domain::Result;
use catcount_domain::ports::{ClusterHealth, SearchIndexAdmin};
use serde_json::json;
use std::sync::Mutex;

/// Records calls and tracks a single index's existence
#[derive(Default)]
struct RecordingAdmin {
    exists: Mutex<bool>,
    calls: Mutex<Vec<String>>,
}

impl RecordingAdmin {
    fn with_index() -> Self {
        Self {
            exists: Mutex::new(true),
            calls: Mutex::default(),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl SearchIndexAdmin for RecordingAdmin {
    async fn index_exists(&self, _index: &str) -> Result<bool> {
        self.record("exists");
        Ok(*self.exists.lock().unwrap())
    }

    async fn create_index(&self, _index: &str, _mapping: &serde_json::Value) -> Result<()> {
        self.record("create");
        *self.exists.lock().unwrap() = true;
        Ok(())
    }

    async fn delete_index(&self, _index: &str) -> Result<()> {
        self.record("delete");
        *self.exists.lock().unwrap() = false;
        Ok(())
    }

    async fn refresh(&self, _index: &str) -> Result<()> {
        self.record("refresh");
        Ok(())
    }

    async fn health_check(&self) -> Result<ClusterHealth> {
        Ok(ClusterHealth::Green)
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

#[tokio::test]
async fn test_ensure_index_creates_missing_index() {
    let admin = RecordingAdmin::default();
    let created = admin.ensure_index("category-item", &json!({})).await.unwrap();
    assert!(created);
    assert_eq!(admin.calls(), vec!["exists", "create"]);
}

#[tokio::test]
async fn test_ensure_index_leaves_existing_index() {
    let admin = RecordingAdmin::with_index();
    let created = admin.ensure_index("category-item", &json!({})).await.unwrap();
    assert!(!created);
    assert_eq!(admin.calls(), vec!["exists"]);
}

#[tokio::test]
async fn test_recreate_index_deletes_first() {
    let admin = RecordingAdmin::with_index();
    admin.recreate_index("category-item", &json!({})).await.unwrap();
    assert_eq!(admin.calls(), vec!["exists", "delete", "create"]);
}

#[test]
fn test_cluster_health_parsing() {
    assert_eq!("green".parse::<ClusterHealth>().unwrap(), ClusterHealth::Green);
    assert_eq!("YELLOW".parse::<ClusterHealth>().unwrap(), ClusterHealth::Yellow);
    assert_eq!("red".parse::<ClusterHealth>().unwrap(), ClusterHealth::Red);
    assert!("purple".parse::<ClusterHealth>().is_err());
    assert_eq!(ClusterHealth::Yellow.to_string(), "yellow");
}
