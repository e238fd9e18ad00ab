// Server configuration: CLI flags and environment, over an optional TOML file

use crate::tools::SnapshotDir;
use clap::Parser;
use postman_sdk::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Default)]
#[command(name = "postman-mcp")]
#[command(about = "MCP server for Postman collections and environments", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Postman API key
    #[arg(long, env = "POSTMAN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Postman API base URL
    #[arg(long, env = "POSTMAN_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Directory for save_collection / push_collection files (default: system temp dir)
    #[arg(long, env = "POSTMAN_SNAPSHOT_DIR")]
    pub snapshot_dir: Option<PathBuf>,

    /// Reject snapshot filenames that resolve outside the snapshot directory
    #[arg(long, env = "POSTMAN_CONFINE_SNAPSHOTS")]
    pub confine_snapshots: bool,

    /// Path to configuration file
    #[arg(short, long, env = "POSTMAN_MCP_CONFIG", default_value = "postman-mcp.toml")]
    pub config: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("POSTMAN_API_KEY env var is required")]
    MissingApiKey,

    #[error("Failed to read configuration file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings that may come from the TOML file. The API key never does.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub snapshot_dir: Option<PathBuf>,

    #[serde(default)]
    pub confine_snapshots: bool,
}

impl FileConfig {
    /// Load the file if it exists, otherwise use defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_key: String,
    pub base_url: String,
    pub snapshot_dir: PathBuf,
    pub confine_snapshots: bool,
}

impl ServerConfig {
    /// Resolve the effective configuration.
    ///
    /// The API key is checked before anything else is touched.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let api_key = cli
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let file = FileConfig::load(&cli.config)?;
        Ok(Self::merge(api_key, cli, file))
    }

    /// CLI and environment win over the file; the file wins over defaults.
    pub fn merge(api_key: String, cli: Cli, file: FileConfig) -> Self {
        Self {
            api_key,
            base_url: cli
                .base_url
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            snapshot_dir: cli
                .snapshot_dir
                .or(file.snapshot_dir)
                .unwrap_or_else(std::env::temp_dir),
            confine_snapshots: cli.confine_snapshots || file.confine_snapshots,
        }
    }

    pub fn snapshots(&self) -> SnapshotDir {
        SnapshotDir::new(&self.snapshot_dir).confined(self.confine_snapshots)
    }
}
