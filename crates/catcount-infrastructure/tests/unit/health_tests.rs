//! Health check tests

use async_trait::async_trait;
use catcount_domain::ports::{ClusterHealth, SearchIndexAdmin};
use catcount_domain::{Error, Result};
use catcount_infrastructure::health::{HealthChecker, HealthStatus};
use std::sync::Arc;

/// Admin adapter answering health checks with a fixed outcome
struct FixedHealth(Option<ClusterHealth>);

#[async_trait]
impl SearchIndexAdmin for FixedHealth {
    async fn index_exists(&self, _index: &str) -> Result<bool> {
        Ok(true)
    }

    async fn create_index(&self, _index: &str, _mapping: &serde_json::Value) -> Result<()> {
        Ok(())
    }

    async fn delete_index(&self, _index: &str) -> Result<()> {
        Ok(())
    }

    async fn refresh(&self, _index: &str) -> Result<()> {
        Ok(())
    }

    async fn health_check(&self) -> Result<ClusterHealth> {
        self.0.ok_or_else(|| {
            Error::network_with_source(
                "cluster health",
                std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
            )
        })
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}

async fn check(outcome: Option<ClusterHealth>) -> catcount_infrastructure::health::HealthCheck {
    HealthChecker::new(Arc::new(FixedHealth(outcome))).check().await
}

#[tokio::test]
async fn test_green_is_up() {
    let result = check(Some(ClusterHealth::Green)).await;
    assert_eq!(result.status, HealthStatus::Up);
    assert_eq!(result.name, "search_engine");
    assert!(result.error.is_none());
}

#[tokio::test]
async fn test_yellow_is_degraded() {
    let result = check(Some(ClusterHealth::Yellow)).await;
    assert_eq!(result.status, HealthStatus::Degraded);
    assert!(result.status.is_operational());
    assert_eq!(
        result.error.as_deref(),
        Some("fixed cluster status is yellow")
    );
}

#[tokio::test]
async fn test_red_is_down() {
    let result = check(Some(ClusterHealth::Red)).await;
    assert_eq!(result.status, HealthStatus::Down);
    assert!(!result.status.is_operational());
}

#[tokio::test]
async fn test_failure_is_down_with_error() {
    let result = check(None).await;
    assert_eq!(result.status, HealthStatus::Down);
    assert!(result.error.unwrap().contains("cluster health"));
}
