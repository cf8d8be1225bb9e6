//! Driver configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult, VertexModel, DEFAULT_CAPACITY};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "GSEARCH_CONFIG";

/// How command results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per command.
    Json,
}

impl OutputFormat {
    /// Parse a format from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Vertex model of the session graph.
    #[serde(default)]
    pub model: VertexModel,
    /// Number of vertex slots.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Suppress the menu and prompts.
    #[serde(default)]
    pub quiet: bool,
    /// Log filter passed to the logger.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            model: VertexModel::default(),
            capacity: default_capacity(),
            format: OutputFormat::default(),
            quiet: false,
            log_level: default_log_level(),
        }
    }
}

impl DriverConfig {
    /// Reject settings no graph can be built from.
    pub fn validate(&self) -> GraphResult<()> {
        if self.capacity == 0 {
            return Err(GraphError::Config("capacity must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Logger builder: `RUST_LOG` first, then `log_level`; `verbose` forces debug over both.
    pub fn logger_builder(&self, verbose: bool) -> env_logger::Builder {
        let mut builder = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        );
        if verbose {
            builder.parse_filters("debug");
        }
        builder
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<DriverConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraphError::Config(format!("failed to read config file {}: {e}", path.display()))
    })?;

    let config: DriverConfig = toml::from_str(&content)
        .map_err(|e| GraphError::Config(format!("failed to parse config: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Resolve the config file path:
/// 1. Explicit path (CLI arg)
/// 2. `GSEARCH_CONFIG` environment variable
///
/// Returns `None` when neither is set, meaning built-in defaults apply.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
