// MCP (Model Context Protocol) server bridging Postman collections and
// environments to agent clients over stdio

pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{Cli, ServerConfig};
pub use error::{ToolError, ToolResult};
pub use server::McpServer;
