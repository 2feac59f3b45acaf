//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::config::TreadConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: TreadConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            TreadConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find config file in the directory tree, walking upward.
    fn find_config(start: &PathBuf) -> Option<TreadConfig> {
        let config_names = ["tread.toml", ".tread.toml", "tread.json"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = TreadConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve the catalog path from a flag or the config file.
    pub fn catalog_path(&self, flag: Option<&str>) -> Result<String> {
        flag.map(|p| p.to_string())
            .or_else(|| self.config.catalog.path.clone())
            .context("No catalog path given; pass --catalog or set catalog.path in tread.toml")
    }
}
