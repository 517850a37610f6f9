//! Route command: load the graph, read the query, run each strategy
mod human;
mod json;
mod records;

use std::time::Instant;

use routefind_core::config::RouteConfig;
use routefind_core::dataset::load_graph;
use routefind_core::error::Result;
use routefind_core::graph::RouteResult;
use routefind_core::trace_time;

use crate::cli::{Cli, OutputFormat};
use crate::commands::io;

/// Execute the route command
pub fn execute(cli: &Cli, config: &RouteConfig, start: Instant) -> Result<()> {
    let graph = load_graph(&config.dataset)?;
    trace_time!(start, "load_graph");

    let query = io::read_input(cli)?;
    query.validate(&graph)?;
    tracing::debug!(start = %query.start, goal = %query.goal, "query");

    let strategies = config.strategies()?;
    let opts = config.search_options();

    let results = strategies
        .into_iter()
        .map(|strategy| RouteResult::search(&graph, strategy, &query.start, &query.goal, &opts))
        .collect::<Result<Vec<_>>>()?;
    trace_time!(start, "search");

    let rendered = match cli.format {
        OutputFormat::Human => human::render(&results, &config.output.distance_unit),
        OutputFormat::Json => json::render(&results)?,
        OutputFormat::Records => records::render(&query, &results),
    };

    io::write_output(cli, &rendered)
}
