//! HTTP transport layer for the Postman SDK.

use crate::config::{ClientConfig, API_KEY_HEADER};
use crate::error::{PostmanError, PostmanResult};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// HTTP transport for making API requests.
///
/// Requests are sent exactly once. Non-2xx responses are turned into
/// [`PostmanError::Api`] and never retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> PostmanResult<Self> {
        let mut api_key = header::HeaderValue::from_str(&config.api_key)
            .map_err(|_| PostmanError::Config("Invalid API key format".to_string()))?;
        api_key.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::HeaderName::from_static(API_KEY_HEADER), api_key);

        let mut builder = Client::builder()
            .user_agent(concat!("postman-sdk/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Build a URL by appending percent-encoded path segments to the base URL.
    fn build_url(&self, segments: &[&str]) -> PostmanResult<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PostmanError::Config("base_url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request, mapping non-success statuses to API errors.
    async fn execute(&self, request: RequestBuilder) -> PostmanResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Postman API request failed");
        Err(PostmanError::from_response(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> PostmanResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> PostmanResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "GET request");

        let response = self.execute(self.client.get(url)).await?;
        Self::decode(response).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> PostmanResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "PUT request");

        let response = self.execute(self.client.put(url).json(body)).await?;
        Self::decode(response).await
    }
}
