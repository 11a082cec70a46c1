//! Algorithm configuration for algokit
//!
//! Configuration is optional: every field has a default, and a TOML file only
//! needs to name the values it changes.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;

pub use types::{
    AlgoConfig, GraphConfig, SortConfig, CONFIG_FORMAT_VERSION, DEFAULT_PARALLEL_THRESHOLD,
};

impl AlgoConfig {
    /// Parse configuration from a TOML document and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AlgoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), frontier = ?config.graph.frontier, "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the algorithms cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        if self.sort.parallel_threshold == 0 {
            bail_invalid!("sort.parallel_threshold", 0);
        }
        Ok(())
    }
}
