//! Configuration type definitions

use crate::graph::types::{Weight, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};

/// Name of the configuration file discovered in the working directory
pub const CONFIG_FILE_NAME: &str = "waypath.toml";

/// Upper bound applied to trip budgets when no configuration overrides it
pub const DEFAULT_MAX_BUDGET: i64 = 10_000;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Edge-list loading options
    #[serde(default)]
    pub graph: GraphConfig,

    /// Trip counting options
    #[serde(default)]
    pub trips: TripsConfig,
}

/// Configuration for building graphs from edge lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Weight given to edge tokens that carry no digits
    #[serde(default = "default_weight")]
    pub default_weight: Weight,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_weight: default_weight(),
        }
    }
}

/// Configuration for trip counting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripsConfig {
    /// Largest budget accepted by trip queries
    #[serde(default = "default_max_budget")]
    pub max_budget: i64,
}

impl Default for TripsConfig {
    fn default() -> Self {
        Self {
            max_budget: default_max_budget(),
        }
    }
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

fn default_max_budget() -> i64 {
    DEFAULT_MAX_BUDGET
}
