//! Elasticsearch category item repository

use super::aggregation::categories_count_request;
use super::client::ElasticsearchClient;
use super::response::{SearchResponse, main_categories};
use crate::constants::{ES_ENDPOINT_DOC, ES_ENDPOINT_SEARCH};
use crate::utils::HttpResponseUtils;
use async_trait::async_trait;
use catcount_domain::entities::CategoryItem;
use catcount_domain::error::Result;
use catcount_domain::repositories::CategoryItemRepository;
use catcount_domain::value_objects::MainCategory;
use reqwest::Method;

/// Category item repository backed by an Elasticsearch index
///
/// Stateless apart from the client; share it behind an `Arc` across tasks.
#[derive(Debug, Clone)]
pub struct ElasticsearchCategoryItemRepository {
    client: ElasticsearchClient,
    index: String,
}

impl ElasticsearchCategoryItemRepository {
    /// Create a repository writing to and aggregating over `index`
    pub fn new<S: Into<String>>(client: ElasticsearchClient, index: S) -> Self {
        Self {
            client,
            index: index.into(),
        }
    }

    /// Name of the backing index
    pub fn index(&self) -> &str {
        &self.index
    }

    /// The client used for requests
    pub fn client(&self) -> &ElasticsearchClient {
        &self.client
    }
}

#[async_trait]
impl CategoryItemRepository for ElasticsearchCategoryItemRepository {
    async fn save(&self, item: &CategoryItem) -> Result<()> {
        item.validate()?;

        let context = format!("index item '{}' into '{}'", item.id, self.index);
        let response = self
            .client
            .send_json(
                Method::PUT,
                &[self.index.as_str(), ES_ENDPOINT_DOC, item.id.as_str()],
                item,
                &context,
            )
            .await?;
        HttpResponseUtils::check_status(response, &context).await?;

        tracing::debug!(
            index = %self.index,
            id = %item.id,
            main = %item.main,
            sub = item.sub.as_deref(),
            "category item saved"
        );
        Ok(())
    }

    async fn get_categories_count(&self) -> Result<Vec<MainCategory>> {
        let context = format!("count categories in '{}'", self.index);
        let request = categories_count_request();
        let response = self
            .client
            .send_json(
                Method::POST,
                &[self.index.as_str(), ES_ENDPOINT_SEARCH],
                &request,
                &context,
            )
            .await?;
        let body: SearchResponse = HttpResponseUtils::check_and_parse(response, &context).await?;
        let categories = main_categories(&body)?;

        tracing::debug!(
            index = %self.index,
            main_categories = categories.len(),
            "category counts fetched"
        );
        Ok(categories)
    }
}
