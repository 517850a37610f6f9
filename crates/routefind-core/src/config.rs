//! Configuration for routefind
//!
//! Configuration is read from `routefind.toml` in the working directory, or
//! from an explicit path. Every key is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, RouteError};
use crate::graph::{SearchOptions, Strategy};

pub use types::{DatasetConfig, OutputConfig, RouteConfig, SearchConfig, CONFIG_FILE_NAME};

impl RouteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RouteError::io_operation("read", path.display(), e))?;
        let config: RouteConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else `routefind.toml` under `dir` if it
    /// exists, else the defaults
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "config_found");
            return Self::load(&candidate);
        }
        Ok(Self::default())
    }

    /// Parsed strategy list, duplicates removed
    pub fn strategies(&self) -> Result<Vec<Strategy>> {
        let mut strategies: Vec<Strategy> = Vec::new();
        for name in &self.search.strategies {
            let strategy: Strategy = name.parse()?;
            if !strategies.contains(&strategy) {
                strategies.push(strategy);
            }
        }
        if strategies.is_empty() {
            crate::bail_invalid!("search.strategies", "empty list");
        }
        Ok(strategies)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            closed_set: self.search.closed_set,
        }
    }

    fn validate(&self) -> Result<()> {
        self.strategies().map(|_| ())
    }
}
