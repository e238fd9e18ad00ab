pub mod collections;
pub mod environments;
pub mod snapshot;
pub mod tree;
mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use collections::{
    GetCollectionStructureTool, GetCollectionTool, ListCollectionsTool, UpdateCollectionTool,
};
pub use environments::{GetEnvironmentTool, ListEnvironmentsTool};
pub use registry::{
    json_schema_empty, json_schema_object, json_schema_record, json_schema_string,
    parse_arguments, Tool, ToolRegistry,
};
pub use snapshot::{PushCollectionTool, SaveCollectionTool, SnapshotDir};
pub use tree::{render_collection, render_tree};

use postman_sdk::PostmanApi;
use std::sync::Arc;

/// Registry with every Postman tool, in the order clients will list them.
pub fn postman_registry(api: Arc<dyn PostmanApi>, snapshots: Arc<SnapshotDir>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // Collections
    registry.register(Arc::new(ListCollectionsTool::new(api.clone())));
    registry.register(Arc::new(GetCollectionStructureTool::new(api.clone())));
    registry.register(Arc::new(GetCollectionTool::new(api.clone())));
    registry.register(Arc::new(UpdateCollectionTool::new(api.clone())));

    // Local snapshots
    registry.register(Arc::new(SaveCollectionTool::new(api.clone(), snapshots.clone())));
    registry.register(Arc::new(PushCollectionTool::new(api.clone(), snapshots)));

    // Environments
    registry.register(Arc::new(ListEnvironmentsTool::new(api.clone())));
    registry.register(Arc::new(GetEnvironmentTool::new(api)));

    registry
}
