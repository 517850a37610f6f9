//! Location graph and route search
//!
//! Provides the graph the searches run against and the searches themselves:
//! - Breadth-first search for fewest-hop routes
//! - Depth-first search for the first route found
//! - A* search for shortest-distance routes
//! - Route summaries (hop count and total distance)

pub mod algos;
pub mod distance;
pub mod provider;
pub mod route;
pub mod strategy;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use algos::{astar_find_route, astar_search, bfs_find_route, dfs_find_route};
pub use distance::{distance, DISTANCE_SCALE};
pub use provider::GraphProvider;
pub use route::{summarize, RouteResult, RouteSummary};
pub use strategy::Strategy;
pub use types::{GraphBuilder, Location, LocationGraph, Route, SearchOptions};
