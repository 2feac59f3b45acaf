//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`tread.toml` or `tread.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreadConfig {
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where the catalog data lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON product collection.
    pub path: Option<String>,
}

/// Default display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Items per page for table output.
    #[serde(default = "default_per_page")]
    pub per_page: i64,

    /// Sizing system: "eu" or "us".
    #[serde(default = "default_size_system")]
    pub size_system: String,
}

fn default_per_page() -> i64 {
    24
}

fn default_size_system() -> String {
    "eu".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            size_system: default_size_system(),
        }
    }
}

impl TreadConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}
