use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, RouteError};
use crate::graph::algos::{astar_search, bfs_find_route, dfs_find_route};
use crate::graph::types::{Route, SearchOptions};
use crate::graph::GraphProvider;

/// Route search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Breadth-first: fewest hops
    Bfs,
    /// Depth-first: first route found
    Dfs,
    /// A*: shortest distance
    Astar,
}

impl Strategy {
    /// Every strategy, in report order
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::Astar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Astar => "astar",
        }
    }

    /// Heading used in human-readable reports
    pub fn title(&self) -> &'static str {
        match self {
            Strategy::Bfs => "Breadth-First Search",
            Strategy::Dfs => "Depth-First Search",
            Strategy::Astar => "A* Search",
        }
    }

    /// Run this strategy with default options
    pub fn find_route(&self, provider: &dyn GraphProvider, from: &str, to: &str) -> Result<Route> {
        self.find_route_with(provider, from, to, &SearchOptions::default())
    }

    /// Run this strategy; `opts` only affects A*
    pub fn find_route_with(
        &self,
        provider: &dyn GraphProvider,
        from: &str,
        to: &str,
        opts: &SearchOptions,
    ) -> Result<Route> {
        match self {
            Strategy::Bfs => bfs_find_route(provider, from, to),
            Strategy::Dfs => dfs_find_route(provider, from, to),
            Strategy::Astar => astar_search(provider, from, to, opts),
        }
    }
}

impl FromStr for Strategy {
    type Err = RouteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "astar" | "a*" => Ok(Strategy::Astar),
            other => Err(RouteError::invalid_value(
                "strategy",
                format!("{other} (expected: bfs, dfs, or astar)"),
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
