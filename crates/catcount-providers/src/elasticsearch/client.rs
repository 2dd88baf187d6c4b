//! Elasticsearch REST client
//!
//! Thin transport over `reqwest`: URL building, optional basic auth and
//! error mapping. Also serves as the `SearchIndexAdmin` adapter.

use crate::constants::{
    CONTENT_TYPE_JSON, ELASTICSEARCH_PROVIDER_NAME, ES_ENDPOINT_CLUSTER, ES_ENDPOINT_HEALTH,
    ES_ENDPOINT_REFRESH,
};
use crate::utils::HttpResponseUtils;
use async_trait::async_trait;
use catcount_domain::error::{Error, Result};
use catcount_domain::ports::{ClusterHealth, SearchIndexAdmin};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClusterHealthResponse {
    status: String,
}

/// Elasticsearch REST client
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// ## Example
///
/// ```rust,no_run
/// use catcount_providers::elasticsearch::ElasticsearchClient;
///
/// fn example() -> catcount_providers::Result<()> {
///     let client = ElasticsearchClient::new("http://localhost:9200", reqwest::Client::new())?
///         .with_basic_auth("elastic", Some("changeme".to_string()));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ElasticsearchClient {
    base_url: Url,
    http_client: Client,
    credentials: Option<Credentials>,
}

impl ElasticsearchClient {
    /// Create a client for the cluster at `base_url`
    ///
    /// # Errors
    /// `Error::Configuration` when `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str, http_client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config_with_source(format!("invalid engine URL '{base_url}'"), e))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "engine URL '{base_url}' must be an http(s) URL"
            )));
        }
        Ok(Self {
            base_url,
            http_client,
            credentials: None,
        })
    }

    /// Authenticate every request with HTTP basic auth
    #[must_use]
    pub fn with_basic_auth<U: Into<String>>(mut self, username: U, password: Option<String>) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password,
        });
        self
    }

    /// Base URL of the cluster
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL from path segments, percent-encoding each one
    ///
    /// `.` and `..` are rejected: URL normalization would drop them even
    /// when percent-encoded, and the request would hit another resource.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(Error::invalid_argument(format!(
                "path segment '{segment}' cannot address an engine resource"
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("engine URL '{}' cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        let builder = self.http_client.request(method, url);
        Ok(match &self.credentials {
            Some(credentials) => {
                builder.basic_auth(&credentials.username, credentials.password.as_ref())
            }
            None => builder,
        })
    }

    /// Send a request without a body
    pub async fn send(&self, method: Method, segments: &[&str], context: &str) -> Result<Response> {
        self.request(method, segments)?
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(context, e))
    }

    /// Send a request with a JSON body
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
        context: &str,
    ) -> Result<Response> {
        let payload = serde_json::to_vec(body)?;
        self.request(method, segments)?
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(context, e))
    }
}

#[async_trait]
impl SearchIndexAdmin for ElasticsearchClient {
    async fn index_exists(&self, index: &str) -> Result<bool> {
        let context = format!("check index '{index}'");
        let response = self.send(Method::HEAD, &[index], &context).await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => Err(Error::search_engine(status.as_u16(), context)),
        }
    }

    async fn create_index(&self, index: &str, mapping: &serde_json::Value) -> Result<()> {
        let context = format!("create index '{index}'");
        let response = self
            .send_json(Method::PUT, &[index], mapping, &context)
            .await?;
        HttpResponseUtils::check_status(response, &context).await?;
        tracing::info!(index, "index created");
        Ok(())
    }

    async fn delete_index(&self, index: &str) -> Result<()> {
        let context = format!("delete index '{index}'");
        let response = self.send(Method::DELETE, &[index], &context).await?;
        HttpResponseUtils::check_status(response, &context).await?;
        tracing::info!(index, "index deleted");
        Ok(())
    }

    async fn refresh(&self, index: &str) -> Result<()> {
        let context = format!("refresh index '{index}'");
        let response = self
            .send(Method::POST, &[index, ES_ENDPOINT_REFRESH], &context)
            .await?;
        HttpResponseUtils::check_status(response, &context).await?;
        tracing::debug!(index, "index refreshed");
        Ok(())
    }

    async fn health_check(&self) -> Result<ClusterHealth> {
        let context = "cluster health";
        let response = self
            .send(
                Method::GET,
                &[ES_ENDPOINT_CLUSTER, ES_ENDPOINT_HEALTH],
                context,
            )
            .await?;
        let health: ClusterHealthResponse =
            HttpResponseUtils::check_and_parse(response, context).await?;
        health.status.parse()
    }

    fn provider_name(&self) -> &str {
        ELASTICSEARCH_PROVIDER_NAME
    }
}
