//! Search engine health checks
//!
//! A liveness probe over the index administration port. It is unrelated to
//! the repository logic and never consulted by it.

use crate::constants::HEALTH_CHECK_SEARCH_ENGINE;
use crate::logging::log_health_check;
use catcount_domain::ports::{ClusterHealth, SearchIndexAdmin};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is healthy and fully operational
    Up,
    /// Service is experiencing issues but still operational
    Degraded,
    /// Service is down and not operational
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the service is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Check if the service is operational (healthy or degraded)
    pub fn is_operational(&self) -> bool {
        matches!(self, Self::Up | Self::Degraded)
    }
}

impl From<ClusterHealth> for HealthStatus {
    fn from(health: ClusterHealth) -> Self {
        match health {
            ClusterHealth::Green => Self::Up,
            ClusterHealth::Yellow => Self::Degraded,
            ClusterHealth::Red => Self::Down,
        }
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the health check
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// Timestamp of last check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Optional error message
    pub error: Option<String>,
}

impl HealthCheck {
    /// Create a check result with the given status
    pub fn with_status<S: Into<String>>(name: S, status: HealthStatus) -> Self {
        Self {
            name: name.into(),
            status,
            timestamp: chrono::Utc::now(),
            response_time_ms: 0,
            error: None,
        }
    }

    /// Create a failed health check
    pub fn failed<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self {
            error,
            ..Self::with_status(name, HealthStatus::Down)
        }
    }

    /// Set response time
    #[must_use]
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

/// Runs the search engine liveness probe
#[derive(Clone)]
pub struct HealthChecker {
    admin: Arc<dyn SearchIndexAdmin>,
}

impl HealthChecker {
    /// Create a checker over an index administration adapter
    pub fn new(admin: Arc<dyn SearchIndexAdmin>) -> Self {
        Self { admin }
    }

    /// Probe the engine; failures become a `Down` result rather than an error
    pub async fn check(&self) -> HealthCheck {
        let start = Instant::now();
        let check = match self.admin.health_check().await {
            Ok(health) => {
                let mut check = HealthCheck::with_status(HEALTH_CHECK_SEARCH_ENGINE, health.into());
                if health != ClusterHealth::Green {
                    check.error = Some(format!(
                        "{} cluster status is {health}",
                        self.admin.provider_name()
                    ));
                }
                check
            }
            Err(e) => HealthCheck::failed(HEALTH_CHECK_SEARCH_ENGINE, Some(e.to_string())),
        }
        .with_response_time(start.elapsed());

        log_health_check(
            &check.name,
            check.status.is_healthy(),
            check.error.as_deref(),
        );
        check
    }
}
