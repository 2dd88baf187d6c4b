//! Tests for the shared HTTP client pool

use catcount_providers::http::{HttpClientConfig, HttpClientPool};
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = HttpClientConfig::default();
    assert_eq!(config.max_idle_per_host, 10);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.user_agent.starts_with("catcount/"));
}

#[test]
fn test_pool_with_custom_timeout() {
    let pool = HttpClientPool::with_config(HttpClientConfig::with_timeout(Duration::from_secs(5)))
        .expect("client builds");
    assert_eq!(pool.config().timeout, Duration::from_secs(5));
    assert_eq!(pool.config().max_idle_per_host, 10);
}
