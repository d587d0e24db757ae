//! Router settings from TOML or the environment.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_LABEL: &str = "entry";

/// Router settings. Loaded from a TOML file or from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Name attached to every diagnostic this router emits.
    pub label: String,
    /// Emit a trace event for actions that have no registered entry.
    pub log_unmatched: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            log_unmatched: false,
        }
    }
}

impl RouterConfig {
    /// Env vars:
    /// - `ENTRY_ROUTER_LABEL` (default `entry`)
    /// - `ENTRY_ROUTER_LOG_UNMATCHED` (default `false`)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            label: std::env::var("ENTRY_ROUTER_LABEL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            log_unmatched: std::env::var("ENTRY_ROUTER_LOG_UNMATCHED")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse router config")
    }
}

/// Load and parse a TOML router config file.
pub fn load_config(path: &Path) -> Result<RouterConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: RouterConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
