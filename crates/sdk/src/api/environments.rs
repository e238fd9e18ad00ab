//! Environments API endpoints.

use crate::client::PostmanClient;
use crate::error::PostmanResult;
use serde::Deserialize;
use serde_json::Value;

/// Environments API. Payloads are passed through as raw JSON.
pub struct EnvironmentsApi<'a> {
    client: &'a PostmanClient,
}

impl<'a> EnvironmentsApi<'a> {
    pub(crate) fn new(client: &'a PostmanClient) -> Self {
        Self { client }
    }

    /// List environments. Returns the `environments` array as received.
    pub async fn list(&self) -> PostmanResult<Value> {
        let response: ListEnvironmentsResponse = self.client.http.get(&["environments"]).await?;
        Ok(response.environments)
    }

    /// Fetch one environment, including its variables.
    pub async fn get(&self, uid: &str) -> PostmanResult<Value> {
        let response: EnvironmentEnvelope = self.client.http.get(&["environments", uid]).await?;
        Ok(response.environment)
    }
}

#[derive(Debug, Deserialize)]
struct ListEnvironmentsResponse {
    environments: Value,
}

#[derive(Debug, Deserialize)]
struct EnvironmentEnvelope {
    environment: Value,
}
