// Local snapshot files: save a collection to disk, push it back later

use crate::error::{ToolError, ToolResult};
use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, parse_arguments, Tool};
use postman_sdk::PostmanApi;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Directory that `save_collection` writes to and `push_collection` reads from.
///
/// Filenames are joined under the root the way a path join would: a leading
/// `/` does not leave the directory, but `..` does unless the store is
/// confined. There is no locking; concurrent writers to one name race.
#[derive(Debug, Clone)]
pub struct SnapshotDir {
    root: PathBuf,
    confine: bool,
}

impl SnapshotDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            confine: false,
        }
    }

    /// Snapshots in the operating system's temporary directory.
    pub fn temp() -> Self {
        Self::new(std::env::temp_dir())
    }

    /// Reject filenames that would resolve outside the root.
    pub fn confined(mut self, confine: bool) -> Self {
        self.confine = confine;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, filename: &str) -> ToolResult<PathBuf> {
        let requested = Path::new(filename);

        if self.confine
            && requested.components().any(|c| {
                matches!(
                    c,
                    Component::ParentDir | Component::RootDir | Component::Prefix(_)
                )
            })
        {
            return Err(ToolError::PathEscapesSnapshotDir(filename.to_string()));
        }

        let relative: PathBuf = requested
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect();
        Ok(self.root.join(relative))
    }

    /// Write `value` as 2-space pretty JSON and return the path written.
    pub async fn save(&self, filename: &str, value: &Value) -> ToolResult<PathBuf> {
        let path = self.resolve(filename)?;
        let json = serde_json::to_string_pretty(value)?;

        tokio::fs::write(&path, json)
            .await
            .map_err(|source| ToolError::Io {
                action: "Failed to write",
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Saved snapshot");
        Ok(path)
    }

    pub async fn load(&self, filename: &str) -> ToolResult<Value> {
        let path = self.resolve(filename)?;

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ToolError::Io {
                action: "Failed to read",
                path: path.clone(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| ToolError::MalformedSnapshot { path, source })
    }
}

impl Default for SnapshotDir {
    fn default() -> Self {
        Self::temp()
    }
}

#[derive(Debug, Deserialize)]
struct SnapshotArgs {
    uid: String,
    filename: String,
}

fn snapshot_schema(filename_description: &str) -> Value {
    json_schema_object(
        serde_json::json!({
            "uid": json_schema_string("The collection UID"),
            "filename": json_schema_string(filename_description)
        }),
        vec!["uid", "filename"],
    )
}

/// Tool to fetch a collection and save it as a local JSON file
pub struct SaveCollectionTool {
    api: Arc<dyn PostmanApi>,
    snapshots: Arc<SnapshotDir>,
}

impl SaveCollectionTool {
    pub fn new(api: Arc<dyn PostmanApi>, snapshots: Arc<SnapshotDir>) -> Self {
        Self { api, snapshots }
    }
}

#[async_trait::async_trait]
impl Tool for SaveCollectionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "save_collection".to_string(),
            description: "Fetch a Postman collection and save it as a local JSON file for editing"
                .to_string(),
            input_schema: snapshot_schema("Local filename to save to, e.g. my-collection.json"),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: SnapshotArgs = parse_arguments("save_collection", arguments)?;

        let collection = self.api.get_collection(&args.uid).await?;
        let path = self.snapshots.save(&args.filename, &collection).await?;

        Ok(CallToolResult::text(format!("Saved to {}", path.display())))
    }
}

/// Tool to push a local JSON file back as a collection update
pub struct PushCollectionTool {
    api: Arc<dyn PostmanApi>,
    snapshots: Arc<SnapshotDir>,
}

impl PushCollectionTool {
    pub fn new(api: Arc<dyn PostmanApi>, snapshots: Arc<SnapshotDir>) -> Self {
        Self { api, snapshots }
    }
}

#[async_trait::async_trait]
impl Tool for PushCollectionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "push_collection".to_string(),
            description: "Read a local JSON file and push it back to Postman as a collection update"
                .to_string(),
            input_schema: snapshot_schema("Local filename to read from, e.g. my-collection.json"),
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<CallToolResult> {
        let args: SnapshotArgs = parse_arguments("push_collection", arguments)?;

        let collection = self.snapshots.load(&args.filename).await?;
        let response = self.api.update_collection(&args.uid, collection).await?;

        Ok(CallToolResult::text(serde_json::to_string_pretty(&response)?))
    }
}
