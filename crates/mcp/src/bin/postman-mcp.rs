// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use postman_mcp::config::{Cli, ServerConfig};
use postman_mcp::server::McpServer;
use postman_mcp::tools::postman_registry;
use postman_sdk::PostmanClient;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    // Variables already set in the environment win over `.env`
    if let Err(e) = dotenvy::from_path(Path::new(".env")) {
        if !e.not_found() {
            tracing::warn!(error = %e, "Ignoring unreadable .env file");
        }
    }

    let config = match ServerConfig::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", anyhow::Error::new(e));
            std::process::exit(1);
        }
    };

    tracing::info!(
        base_url = %config.base_url,
        snapshot_dir = %config.snapshot_dir.display(),
        confine_snapshots = config.confine_snapshots,
        "Postman MCP server starting"
    );

    let client = PostmanClient::builder()
        .base_url(config.base_url.as_str())
        .api_key(config.api_key.as_str())
        .build()?;

    let registry = postman_registry(Arc::new(client), Arc::new(config.snapshots()));
    tracing::info!("Registered {} tools", registry.len());

    McpServer::new(registry).start().await?;

    Ok(())
}
