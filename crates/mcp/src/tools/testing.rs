// In-memory Postman API used by handler tests

use postman_sdk::{CollectionSummary, PostmanApi, PostmanError, PostmanResult};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakePostman {
    summaries: Value,
    collections: Mutex<HashMap<String, Value>>,
    environments: Value,
    environment_by_uid: HashMap<String, Value>,
    puts: Mutex<Vec<(String, Value)>>,
}

fn not_found(kind: &str, uid: &str) -> PostmanError {
    PostmanError::Api {
        status: 404,
        message: format!("{kind} {uid} not found"),
        details: Some("instanceNotFoundError".to_string()),
    }
}

impl FakePostman {
    pub fn with_collections(mut self, summaries: Value) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_collection(self, uid: &str, collection: Value) -> Self {
        self.collections
            .lock()
            .unwrap()
            .insert(uid.to_string(), collection);
        self
    }

    pub fn with_environments(mut self, environments: Value) -> Self {
        self.environments = environments;
        self
    }

    pub fn with_environment(mut self, uid: &str, environment: Value) -> Self {
        self.environment_by_uid.insert(uid.to_string(), environment);
        self
    }

    pub fn puts(&self) -> Vec<(String, Value)> {
        self.puts.lock().unwrap().clone()
    }

    pub fn collection(&self, uid: &str) -> Option<Value> {
        self.collections.lock().unwrap().get(uid).cloned()
    }
}

#[async_trait::async_trait]
impl PostmanApi for FakePostman {
    async fn list_collections(&self) -> PostmanResult<Vec<CollectionSummary>> {
        if self.summaries.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(self.summaries.clone())?)
    }

    async fn get_collection(&self, uid: &str) -> PostmanResult<Value> {
        self.collection(uid)
            .ok_or_else(|| not_found("collection", uid))
    }

    async fn update_collection(&self, uid: &str, collection: Value) -> PostmanResult<Value> {
        self.puts
            .lock()
            .unwrap()
            .push((uid.to_string(), collection.clone()));
        let name = collection
            .get("info")
            .and_then(|info| info.get("name"))
            .cloned()
            .unwrap_or(Value::Null);
        self.collections
            .lock()
            .unwrap()
            .insert(uid.to_string(), collection);
        Ok(json!({"collection": {"id": uid, "name": name, "uid": uid}}))
    }

    async fn list_environments(&self) -> PostmanResult<Value> {
        if self.environments.is_null() {
            return Ok(json!([]));
        }
        Ok(self.environments.clone())
    }

    async fn get_environment(&self, uid: &str) -> PostmanResult<Value> {
        self.environment_by_uid
            .get(uid)
            .cloned()
            .ok_or_else(|| not_found("environment", uid))
    }
}
