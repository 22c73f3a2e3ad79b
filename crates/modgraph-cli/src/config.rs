//! Explorer configuration.
//!
//! Load order: `.modgraph/config.toml` → environment variables → defaults.

use anyhow::Result;
use modgraph_core::storage::DATA_FILE;
use modgraph_nav::search::DEFAULT_TYPE_ORDER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level explorer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub data: DataConfig,
    pub display: DisplayConfig,
}

/// Where the graph document lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the JSON-LD document, relative to the project root unless absolute.
    pub path: PathBuf,
}

/// Output shaping for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of hubs printed by `hubs` when no limit is given.
    pub hub_limit: usize,
    /// Maximum entities printed per type group by `search` and `list`.
    pub search_result_limit: usize,
    /// Primary types shown first, in this order.
    pub type_order: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DATA_FILE),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hub_limit: 10,
            search_result_limit: 50,
            type_order: DEFAULT_TYPE_ORDER.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl ExplorerConfig {
    /// Load config from `.modgraph/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".modgraph").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override("MODGRAPH_DATA", &mut config.data.path);
        env_override("MODGRAPH_HUB_LIMIT", &mut config.display.hub_limit);
        env_override(
            "MODGRAPH_SEARCH_LIMIT",
            &mut config.display.search_result_limit,
        );

        if config.display.search_result_limit == 0 {
            anyhow::bail!("search_result_limit must be at least 1");
        }
        config.display.type_order.retain(|t| !t.trim().is_empty());

        Ok(config)
    }

    /// Resolve the graph document path against the project root.
    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        if self.data.path.is_absolute() {
            self.data.path.clone()
        } else {
            project_root.join(&self.data.path)
        }
    }
}
