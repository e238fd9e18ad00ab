//! Configuration types for the Postman SDK.

use std::time::Duration;
use url::Url;

/// Public Postman API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.getpostman.com";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Configuration for the Postman client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Postman API.
    pub base_url: Url,
    /// API key sent in the `X-Api-Key` header.
    pub api_key: String,
    /// Request timeout. `None` leaves reqwest's default in place.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL and key.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new() {
        let url = Url::parse("https://example.com").unwrap();
        let config = ClientConfig::new(url.clone(), "PMAK-123");

        assert_eq!(config.base_url, url);
        assert_eq!(config.api_key, "PMAK-123");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_default_base_url_parses() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        assert_eq!(url.host_str(), Some("api.getpostman.com"));
    }
}
