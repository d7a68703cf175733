//! Configuration for waypath
//!
//! Configuration is read from `waypath.toml`, either given explicitly or
//! discovered in the working directory. Every key is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;

pub use types::{Config, GraphConfig, TripsConfig, CONFIG_FILE_NAME, DEFAULT_MAX_BUDGET};

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `waypath.toml` from `dir` if it exists, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values the query layer cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.trips.max_budget <= 0 {
            bail_invalid!("trips.max_budget", self.trips.max_budget);
        }
        if self.graph.default_weight < 0 {
            bail_invalid!("graph.default_weight", self.graph.default_weight);
        }
        Ok(())
    }

    /// Check a trip budget against `trips.max_budget`
    pub fn check_budget(&self, budget: i64) -> Result<()> {
        if budget > self.trips.max_budget {
            bail_invalid!(
                "budget",
                format!("{} (max_budget is {})", budget, self.trips.max_budget)
            );
        }
        Ok(())
    }
}
