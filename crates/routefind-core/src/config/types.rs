//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "routefind.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Dataset file locations
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Search behaviour
    #[serde(default)]
    pub search: SearchConfig,

    /// Report rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the city and edge files live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// City records: `name region lat lon`
    #[serde(default = "default_cities")]
    pub cities: PathBuf,

    /// Edge records: `name name`
    #[serde(default = "default_edges")]
    pub edges: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            cities: default_cities(),
            edges: default_edges(),
        }
    }
}

/// Which strategies run and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Strategy names, in report order
    #[serde(default = "default_strategies")]
    pub strategies: Vec<String>,

    /// Use a closed set in A*
    #[serde(default = "default_closed_set")]
    pub closed_set: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategies: default_strategies(),
            closed_set: default_closed_set(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Unit label printed after the total distance
    #[serde(default = "default_distance_unit")]
    pub distance_unit: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            distance_unit: default_distance_unit(),
        }
    }
}

fn default_cities() -> PathBuf {
    PathBuf::from("city.dat")
}

fn default_edges() -> PathBuf {
    PathBuf::from("edge.dat")
}

fn default_strategies() -> Vec<String> {
    vec!["bfs".to_string(), "dfs".to_string(), "astar".to_string()]
}

fn default_closed_set() -> bool {
    true
}

fn default_distance_unit() -> String {
    "miles".to_string()
}
