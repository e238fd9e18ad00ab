// Environment tools

use crate::error::ToolResult;
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::collections::{uid_schema, UidArgs};
use crate::tools::{json_schema_empty, parse_arguments, Tool};
use postman_sdk::PostmanApi;
use serde_json::Value;
use std::sync::Arc;

/// Tool to list environments as pretty JSON
pub struct ListEnvironmentsTool {
    api: Arc<dyn PostmanApi>,
}

impl ListEnvironmentsTool {
    pub fn new(api: Arc<dyn PostmanApi>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl Tool for ListEnvironmentsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_environments".to_string(),
            description: "List all Postman environments in your workspace".to_string(),
            input_schema: json_schema_empty(),
        }
    }

    async fn execute(&self, _arguments: Value) -> ToolResult<CallToolResult> {
        let environments = self.api.list_environments().await?;
        Ok(CallToolResult::text(serde_json::to_string_pretty(
            &environments,
        )?))
    }
}

/// Tool to fetch one environment with its variables
pub struct GetEnvironmentTool {
    api: Arc<dyn PostmanApi>,
}

impl GetEnvironmentTool {
    pub fn new(api: Arc<dyn PostmanApi>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl Tool for GetEnvironmentTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_environment".to_string(),
            description: "Fetch a Postman environment by its UID".to_string(),
            input_schema: uid_schema("The environment UID"),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: UidArgs = parse_arguments("get_environment", arguments)?;

        let environment = self.api.get_environment(&args.uid).await?;
        Ok(CallToolResult::text(serde_json::to_string_pretty(
            &environment,
        )?))
    }
}
