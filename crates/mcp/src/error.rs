// Error types surfaced by tool handlers

use postman_sdk::PostmanError;
use std::error::Error as _;
use std::path::PathBuf;

pub type ToolResult<T> = Result<T, ToolError>;

/// Failure of a single tool invocation.
///
/// `InvalidArguments` is rejected at the protocol level before a handler
/// runs; every other variant is reported to the client as an `isError`
/// tool result.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error(transparent)]
    Api(#[from] PostmanError),

    #[error("{action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON", .path.display())]
    MalformedSnapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} escapes the snapshot directory")]
    PathEscapesSnapshotDir(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolError {
    /// Display text followed by any underlying causes not already in it.
    pub fn diagnostic(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }

    pub fn invalid_arguments(tool: &str, reason: impl ToString) -> Self {
        Self::InvalidArguments {
            tool: tool.to_string(),
            reason: reason.to_string(),
        }
    }
}
