//! Collections API endpoints.

use crate::client::PostmanClient;
use crate::error::PostmanResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Collections API for reading and replacing collections.
pub struct CollectionsApi<'a> {
    client: &'a PostmanClient,
}

impl<'a> CollectionsApi<'a> {
    pub(crate) fn new(client: &'a PostmanClient) -> Self {
        Self { client }
    }

    /// List every collection visible to the API key.
    pub async fn list(&self) -> PostmanResult<Vec<CollectionSummary>> {
        let response: ListCollectionsResponse = self.client.http.get(&["collections"]).await?;
        Ok(response.collections)
    }

    /// Fetch one collection. The payload is returned untouched.
    pub async fn get(&self, uid: &str) -> PostmanResult<Value> {
        let response: CollectionEnvelope = self.client.http.get(&["collections", uid]).await?;
        Ok(response.collection)
    }

    /// Replace a collection and return the API response verbatim.
    pub async fn update(&self, uid: &str, collection: Value) -> PostmanResult<Value> {
        self.client
            .http
            .put(&["collections", uid], &CollectionEnvelope { collection })
            .await
    }
}

/// Entry of `GET /collections`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListCollectionsResponse {
    collections: Vec<CollectionSummary>,
}

/// `{ "collection": ... }`, used both ways on the wire.
#[derive(Debug, Serialize, Deserialize)]
struct CollectionEnvelope {
    collection: Value,
}
