//! Main client for the Postman SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{PostmanError, PostmanResult};
use crate::transport::HttpTransport;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// The subset of the Postman API the bridge relies on.
///
/// Tool handlers hold an `Arc<dyn PostmanApi>` so they can be exercised
/// against an in-memory substitute.
#[async_trait::async_trait]
pub trait PostmanApi: Send + Sync {
    /// `GET /collections`
    async fn list_collections(&self) -> PostmanResult<Vec<CollectionSummary>>;

    /// `GET /collections/{uid}`, unwrapped from its envelope.
    async fn get_collection(&self, uid: &str) -> PostmanResult<Value>;

    /// `PUT /collections/{uid}` with body `{ collection }`.
    async fn update_collection(&self, uid: &str, collection: Value) -> PostmanResult<Value>;

    /// `GET /environments`, unwrapped from its envelope.
    async fn list_environments(&self) -> PostmanResult<Value>;

    /// `GET /environments/{uid}`, unwrapped from its envelope.
    async fn get_environment(&self, uid: &str) -> PostmanResult<Value>;
}

/// Main client for interacting with the Postman API.
#[derive(Debug, Clone)]
pub struct PostmanClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl PostmanClient {
    /// Create a new client builder.
    pub fn builder() -> PostmanClientBuilder {
        PostmanClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> PostmanResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Get the collections API.
    pub fn collections(&self) -> CollectionsApi<'_> {
        CollectionsApi::new(self)
    }

    /// Get the environments API.
    pub fn environments(&self) -> EnvironmentsApi<'_> {
        EnvironmentsApi::new(self)
    }
}

#[async_trait::async_trait]
impl PostmanApi for PostmanClient {
    async fn list_collections(&self) -> PostmanResult<Vec<CollectionSummary>> {
        self.collections().list().await
    }

    async fn get_collection(&self, uid: &str) -> PostmanResult<Value> {
        self.collections().get(uid).await
    }

    async fn update_collection(&self, uid: &str, collection: Value) -> PostmanResult<Value> {
        self.collections().update(uid, collection).await
    }

    async fn list_environments(&self) -> PostmanResult<Value> {
        self.environments().list().await
    }

    async fn get_environment(&self, uid: &str) -> PostmanResult<Value> {
        self.environments().get(uid).await
    }
}

/// Builder for creating a PostmanClient.
pub struct PostmanClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl PostmanClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: None,
        }
    }

    /// Override the base URL. Defaults to the public Postman API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> PostmanResult<PostmanClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PostmanError::Config("api_key is required".to_string()))?;

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let config = ClientConfig {
            base_url,
            api_key,
            timeout: self.timeout,
        };

        PostmanClient::from_config(config)
    }
}

impl Default for PostmanClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_public_api() {
        let client = PostmanClient::builder().api_key("PMAK-1").build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.getpostman.com/");
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = PostmanClient::builder().build();
        assert!(matches!(result, Err(PostmanError::Config(_))));

        let result = PostmanClient::builder().api_key("").build();
        assert!(matches!(result, Err(PostmanError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = PostmanClient::builder()
            .api_key("PMAK-1")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(PostmanError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_with_timeout() {
        let client = PostmanClient::builder()
            .api_key("PMAK-1")
            .base_url("http://localhost:9000")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.config.timeout, Some(Duration::from_secs(5)));
    }
}
