// Collection tools: listing, structure outline, fetch and update

use crate::error::ToolResult;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::tree::render_collection;
use crate::tools::{
    json_schema_empty, json_schema_object, json_schema_record, json_schema_string,
    parse_arguments, Tool,
};
use chrono::{DateTime, Local, TimeZone};
use postman_sdk::{CollectionSummary, PostmanApi};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt::Display;
use std::sync::Arc;

const LAST_UPDATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

#[derive(Debug, Deserialize)]
pub(crate) struct UidArgs {
    pub(crate) uid: String,
}

pub(crate) fn uid_schema(description: &str) -> Value {
    json_schema_object(
        serde_json::json!({ "uid": json_schema_string(description) }),
        vec!["uid"],
    )
}

/// Format an RFC 3339 timestamp as `DD/MM/YYYY, HH:MM:SS` in `tz`.
///
/// Values that do not parse are returned unchanged.
pub fn format_last_update<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(tz).format(LAST_UPDATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// One block per collection, blank-line separated.
pub fn format_collection_list<Tz>(collections: &[CollectionSummary], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    collections
        .iter()
        .map(|c| {
            let updated = c
                .updated_at
                .as_deref()
                .map(|raw| format_last_update(raw, tz))
                .unwrap_or_default();
            format!("{}\n- last update: {}\n- uid: {}", c.name, updated, c.uid)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Tool to list collections in the workspace
pub struct ListCollectionsTool {
    api: Arc<dyn PostmanApi>,
}

impl ListCollectionsTool {
    pub fn new(api: Arc<dyn PostmanApi>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl Tool for ListCollectionsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_collections".to_string(),
            description: "List all Postman collections in your workspace".to_string(),
            input_schema: json_schema_empty(),
        }
    }

    async fn execute(&self, _arguments: Value) -> ToolResult<CallToolResult> {
        let collections = self.api.list_collections().await?;
        Ok(CallToolResult::text(format_collection_list(
            &collections,
            &Local,
        )))
    }
}

/// Tool to render a collection's folder/request outline
pub struct GetCollectionStructureTool {
    api: Arc<dyn PostmanApi>,
}

impl GetCollectionStructureTool {
    pub fn new(api: Arc<dyn PostmanApi>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl Tool for GetCollectionStructureTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_collection_structure".to_string(),
            description: "Fetch only the folder and request tree of a collection. Use this before get_collection to understand the layout without loading the full JSON".to_string(),
            input_schema: uid_schema("The collection UID"),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: UidArgs = parse_arguments("get_collection_structure", arguments)?;

        let collection = self.api.get_collection(&args.uid).await?;
        Ok(CallToolResult::text(render_collection(&collection)))
    }
}

/// Tool to fetch the full JSON of a collection
pub struct GetCollectionTool {
    api: Arc<dyn PostmanApi>,
}

impl GetCollectionTool {
    pub fn new(api: Arc<dyn PostmanApi>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl Tool for GetCollectionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_collection".to_string(),
            description: "Fetch the full JSON of a Postman collection by its UID".to_string(),
            input_schema: uid_schema("The collection UID"),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: UidArgs = parse_arguments("get_collection", arguments)?;

        let collection = self.api.get_collection(&args.uid).await?;
        Ok(CallToolResult::text(serde_json::to_string_pretty(
            &collection,
        )?))
    }
}

#[derive(Debug, Deserialize)]
struct UpdateCollectionArgs {
    uid: String,
    collection: Map<String, Value>,
}

/// Tool to replace a collection with caller-supplied JSON
pub struct UpdateCollectionTool {
    api: Arc<dyn PostmanApi>,
}

impl UpdateCollectionTool {
    pub fn new(api: Arc<dyn PostmanApi>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl Tool for UpdateCollectionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update_collection".to_string(),
            description: "Push updated JSON back to a Postman collection by its UID".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "uid": json_schema_string("The collection UID"),
                    "collection": json_schema_record("The full collection JSON object")
                }),
                vec!["uid", "collection"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: UpdateCollectionArgs = parse_arguments("update_collection", arguments)?;

        let response = self
            .api
            .update_collection(&args.uid, Value::Object(args.collection))
            .await?;
        Ok(CallToolResult::text(serde_json::to_string_pretty(&response)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use crate::protocol::ToolContent;
    use crate::tools::testing::FakePostman;
    use chrono::{FixedOffset, Utc};
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[..] {
            [ToolContent::Text { text }] => text,
            other => panic!("Expected one text block, got {other:?}"),
        }
    }

    #[test]
    fn test_format_last_update_utc() {
        assert_eq!(
            format_last_update("2024-03-05T14:30:00Z", &Utc),
            "05/03/2024, 14:30:00"
        );
        assert_eq!(
            format_last_update("2024-03-05T14:30:00.000Z", &Utc),
            "05/03/2024, 14:30:00"
        );
    }

    #[test]
    fn test_format_last_update_converts_timezone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_last_update("2024-12-31T23:05:09Z", &tz),
            "01/01/2025, 01:05:09"
        );
    }

    #[test]
    fn test_format_last_update_unparseable() {
        assert_eq!(format_last_update("yesterday", &Utc), "yesterday");
    }

    #[test]
    fn test_format_collection_list_example() {
        let collections: Vec<CollectionSummary> = serde_json::from_value(json!([
            {"name": "Demo", "updatedAt": "2024-03-05T14:30:00Z", "uid": "abc-123"}
        ]))
        .unwrap();

        assert_eq!(
            format_collection_list(&collections, &Utc),
            "Demo\n- last update: 05/03/2024, 14:30:00\n- uid: abc-123"
        );
    }

    #[test]
    fn test_format_collection_list_blank_line_separated() {
        let collections: Vec<CollectionSummary> = serde_json::from_value(json!([
            {"name": "One", "updatedAt": "2024-01-02T03:04:05Z", "uid": "u1"},
            {"name": "Two", "updatedAt": "2023-11-12T13:14:15Z", "uid": "u2"}
        ]))
        .unwrap();

        assert_eq!(
            format_collection_list(&collections, &Utc),
            "One\n- last update: 02/01/2024, 03:04:05\n- uid: u1\n\n\
             Two\n- last update: 12/11/2023, 13:14:15\n- uid: u2"
        );
    }

    #[test]
    fn test_format_collection_list_keeps_incomplete_entries() {
        let collections: Vec<CollectionSummary> = serde_json::from_value(json!([
            {"updatedAt": "2024-01-02T03:04:05Z", "uid": "u1"},
            {"name": "No uid"},
            {"name": "Two", "updatedAt": "2023-11-12T13:14:15Z", "uid": "u2"}
        ]))
        .unwrap();

        assert_eq!(
            format_collection_list(&collections, &Utc),
            "\n- last update: 02/01/2024, 03:04:05\n- uid: u1\n\n\
             No uid\n- last update: \n- uid: \n\n\
             Two\n- last update: 12/11/2023, 13:14:15\n- uid: u2"
        );
    }

    #[tokio::test]
    async fn test_list_collections_tool() {
        let fake = Arc::new(FakePostman::default().with_collections(json!([
            {"name": "Demo", "updatedAt": "2024-03-05T14:30:00Z", "uid": "abc-123"}
        ])));
        let tool = ListCollectionsTool::new(fake);

        let result = tool.execute(json!({})).await.unwrap();
        let text = text_of(&result);
        assert!(text.starts_with("Demo\n- last update: "));
        assert!(text.ends_with("\n- uid: abc-123"));
    }

    #[tokio::test]
    async fn test_get_collection_structure_tool() {
        let fake = Arc::new(FakePostman::default().with_collection(
            "abc-123",
            json!({
                "info": {"name": "API"},
                "item": [{"name": "Auth", "item": [{"name": "Login", "request": {"method": "POST"}}]}]
            }),
        ));
        let tool = GetCollectionStructureTool::new(fake);

        let result = tool.execute(json!({"uid": "abc-123"})).await.unwrap();
        assert_eq!(text_of(&result), "API\n\n└─ [folder] Auth\n  └─ [POST] Login");
    }

    #[tokio::test]
    async fn test_get_collection_pretty_prints_in_received_order() {
        let collection: Value =
            serde_json::from_str(r#"{"item":[],"info":{"schema":"s","name":"API"}}"#).unwrap();
        let fake = Arc::new(FakePostman::default().with_collection("abc-123", collection));
        let tool = GetCollectionTool::new(fake);

        let result = tool.execute(json!({"uid": "abc-123"})).await.unwrap();
        assert_eq!(
            text_of(&result),
            "{\n  \"item\": [],\n  \"info\": {\n    \"schema\": \"s\",\n    \"name\": \"API\"\n  }\n}"
        );
    }

    #[tokio::test]
    async fn test_get_collection_unknown_uid_propagates() {
        let tool = GetCollectionTool::new(Arc::new(FakePostman::default()));

        let err = tool.execute(json!({"uid": "nope"})).await.unwrap_err();
        assert!(matches!(err, ToolError::Api(_)));
    }

    #[tokio::test]
    async fn test_update_collection_forwards_body() {
        let fake = Arc::new(FakePostman::default());
        let tool = UpdateCollectionTool::new(fake.clone());

        let collection = json!({"info": {"name": "API"}, "item": []});
        let result = tool
            .execute(json!({"uid": "abc-123", "collection": collection.clone()}))
            .await
            .unwrap();

        assert_eq!(fake.puts(), vec![("abc-123".to_string(), collection)]);
        let response: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(response["collection"]["uid"], "abc-123");
    }

    #[tokio::test]
    async fn test_update_collection_rejects_non_object() {
        let fake = Arc::new(FakePostman::default());
        let tool = UpdateCollectionTool::new(fake.clone());

        let err = tool
            .execute(json!({"uid": "abc-123", "collection": [1, 2]}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
        assert!(fake.puts().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_then_update_round_trip_is_identity() {
        let original = json!({"info": {"name": "API", "_postman_id": "p1"}, "item": [{"name": "Ping", "request": {"method": "GET"}}]});
        let fake = Arc::new(FakePostman::default().with_collection("abc-123", original.clone()));

        let fetched = GetCollectionTool::new(fake.clone())
            .execute(json!({"uid": "abc-123"}))
            .await
            .unwrap();
        let fetched: Value = serde_json::from_str(text_of(&fetched)).unwrap();

        UpdateCollectionTool::new(fake.clone())
            .execute(json!({"uid": "abc-123", "collection": fetched}))
            .await
            .unwrap();

        assert_eq!(fake.collection("abc-123"), Some(original));
    }
}
