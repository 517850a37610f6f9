//! Command dispatch logic for routefind
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use routefind_core::config::RouteConfig;
use routefind_core::error::Result;
use routefind_core::trace_time;

use crate::cli::Cli;
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config = RouteConfig::resolve(cli.config.as_deref(), &cwd)?;
    let config = apply_overrides(cli, config);

    trace_time!(start, "resolve_config");

    commands::route::execute(cli, &config, start)
}

/// Command-line flags win over the configuration file
fn apply_overrides(cli: &Cli, mut config: RouteConfig) -> RouteConfig {
    if let Some(cities) = &cli.cities {
        config.dataset.cities = cities.clone();
    }
    if let Some(edges) = &cli.edges {
        config.dataset.edges = edges.clone();
    }
    if !cli.strategy.is_empty() {
        config.search.strategies = cli.strategy.iter().map(|s| s.to_string()).collect();
    }
    if cli.no_closed_set {
        config.search.closed_set = false;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use routefind_core::graph::Strategy;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "routefind",
            "-",
            "-",
            "--edges",
            "roads.dat",
            "-s",
            "dfs",
            "--no-closed-set",
        ])
        .unwrap();

        let config = apply_overrides(&cli, RouteConfig::default());
        assert_eq!(config.dataset.cities, PathBuf::from("city.dat"));
        assert_eq!(config.dataset.edges, PathBuf::from("roads.dat"));
        assert_eq!(config.strategies().unwrap(), vec![Strategy::Dfs]);
        assert!(!config.search_options().closed_set);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["routefind", "-", "-"]).unwrap();
        let config = apply_overrides(&cli, RouteConfig::default());
        assert_eq!(config, RouteConfig::default());
    }
}
