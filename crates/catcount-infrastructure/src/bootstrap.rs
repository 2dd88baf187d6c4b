//! Wiring from configuration to adapters
//!
//! Builds one HTTP client pool per context and shares it between the
//! repository and the index administration adapter.

use crate::config::AppConfig;
use crate::health::HealthChecker;
use catcount_domain::error::Result;
use catcount_domain::ports::SearchIndexAdmin;
use catcount_domain::repositories::CategoryItemRepository;
use catcount_providers::elasticsearch::mapping::category_item_mapping;
use catcount_providers::elasticsearch::{ElasticsearchCategoryItemRepository, ElasticsearchClient};
use catcount_providers::http::HttpClientPool;
use std::sync::Arc;

/// Repository and index administration built from one configuration
///
/// # Example
///
/// ```ignore
/// use catcount_infrastructure::config::ConfigLoader;
/// use catcount_infrastructure::CategoryItemContext;
///
/// let config = ConfigLoader::new().load()?;
/// let context = CategoryItemContext::from_config(&config)?;
/// context.prepare_index().await?;
/// let counts = context.repository().get_categories_count().await?;
/// ```
#[derive(Clone)]
pub struct CategoryItemContext {
    index: String,
    repository: Arc<dyn CategoryItemRepository>,
    admin: Arc<dyn SearchIndexAdmin>,
}

impl CategoryItemContext {
    /// Build the Elasticsearch adapters described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let es = &config.elasticsearch;
        let pool = HttpClientPool::with_config(es.http_client_config())?;

        let mut client = ElasticsearchClient::new(&es.url, pool.client().clone())?;
        if let Some(username) = &es.username {
            client = client.with_basic_auth(username.clone(), es.password.clone());
        }

        tracing::info!(url = %es.url, index = %es.index, "search engine adapters ready");
        Ok(Self::new(
            es.index.clone(),
            Arc::new(ElasticsearchCategoryItemRepository::new(
                client.clone(),
                es.index.clone(),
            )),
            Arc::new(client),
        ))
    }

    /// Assemble a context from existing adapters
    pub fn new<S: Into<String>>(
        index: S,
        repository: Arc<dyn CategoryItemRepository>,
        admin: Arc<dyn SearchIndexAdmin>,
    ) -> Self {
        Self {
            index: index.into(),
            repository,
            admin,
        }
    }

    /// Index the repository reads and writes
    pub fn index(&self) -> &str {
        &self.index
    }

    /// The category item repository
    pub fn repository(&self) -> Arc<dyn CategoryItemRepository> {
        Arc::clone(&self.repository)
    }

    /// The index administration adapter
    pub fn admin(&self) -> Arc<dyn SearchIndexAdmin> {
        Arc::clone(&self.admin)
    }

    /// A health checker over this context's engine
    pub fn health_checker(&self) -> HealthChecker {
        HealthChecker::new(self.admin())
    }

    /// Create the index with the category item mapping when it is missing
    ///
    /// Returns `true` when the index was created.
    pub async fn prepare_index(&self) -> Result<bool> {
        self.admin
            .ensure_index(&self.index, &category_item_mapping())
            .await
    }

    /// Make pending writes visible to `get_categories_count`
    pub async fn refresh(&self) -> Result<()> {
        self.admin.refresh(&self.index).await
    }
}
