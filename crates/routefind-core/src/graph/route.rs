//! Route summaries and per-strategy search results

use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::require_location;
use crate::graph::distance::distance;
use crate::graph::strategy::Strategy;
use crate::graph::types::{Route, SearchOptions};
use crate::graph::GraphProvider;

/// Hop count and total distance of a route
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteSummary {
    pub hops: usize,
    pub distance: f64,
}

/// Summarize a route using the full location records of `provider`
pub fn summarize(provider: &dyn GraphProvider, route: &Route) -> Result<RouteSummary> {
    let mut total = 0.0;
    let mut previous = require_location(provider, route.start())?;
    for name in &route.names()[1..] {
        let current = require_location(provider, name)?;
        total += distance(previous, current);
        previous = current;
    }

    Ok(RouteSummary {
        hops: route.hops(),
        distance: total,
    })
}

/// Outcome of running one strategy for a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub strategy: Strategy,
    pub from: String,
    pub to: String,
    pub found: bool,
    pub route: Vec<String>,
    pub hops: usize,
    pub distance: f64,
}

impl RouteResult {
    /// Run `strategy` and summarize its route.
    ///
    /// An unreachable goal yields `found: false`; every other error is
    /// propagated.
    #[tracing::instrument(skip(provider, opts), fields(strategy = %strategy, from = %from, to = %to))]
    pub fn search(
        provider: &dyn GraphProvider,
        strategy: Strategy,
        from: &str,
        to: &str,
        opts: &SearchOptions,
    ) -> Result<Self> {
        match strategy.find_route_with(provider, from, to, opts) {
            Ok(route) => {
                let summary = summarize(provider, &route)?;
                tracing::debug!(hops = summary.hops, distance = summary.distance, "route_found");
                Ok(Self {
                    strategy,
                    from: from.to_string(),
                    to: to.to_string(),
                    found: true,
                    route: route.into_names(),
                    hops: summary.hops,
                    distance: summary.distance,
                })
            }
            Err(e) if e.is_path_not_found() => {
                tracing::debug!("route_not_found");
                Ok(Self {
                    strategy,
                    from: from.to_string(),
                    to: to.to_string(),
                    found: false,
                    route: Vec::new(),
                    hops: 0,
                    distance: 0.0,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Total distance rounded to the nearest whole unit
    pub fn rounded_distance(&self) -> i64 {
        self.distance.round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::graph::test_support::{detour, line_graph, two_islands};

    #[test]
    fn test_summarize_line() {
        let graph = line_graph();
        let route = Route::from_names(vec!["A".into(), "B".into(), "C".into()]).unwrap();
        let summary = summarize(&graph, &route).unwrap();
        assert_eq!(summary.hops, 2);
        assert!((summary.distance - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_single() {
        let graph = line_graph();
        let summary = summarize(&graph, &Route::single("B")).unwrap();
        assert_eq!(summary.hops, 0);
        assert_eq!(summary.distance, 0.0);
    }

    #[test]
    fn test_summarize_unknown_name() {
        let graph = line_graph();
        let route = Route::from_names(vec!["A".into(), "Ghost".into()]).unwrap();
        let err = summarize(&graph, &route).unwrap_err();
        assert!(matches!(err, RouteError::UnknownLocation { .. }));
    }

    #[test]
    fn test_route_result_found() {
        let graph = detour();
        let result =
            RouteResult::search(&graph, Strategy::Astar, "S", "G", &SearchOptions::default())
                .unwrap();
        assert!(result.found);
        assert_eq!(result.route, vec!["S", "P1", "P2", "P3", "G"]);
        assert_eq!(result.hops, 4);
        assert_eq!(result.rounded_distance(), 1000);
    }

    #[test]
    fn test_route_result_not_found() {
        let graph = two_islands();
        let result =
            RouteResult::search(&graph, Strategy::Bfs, "A", "X", &SearchOptions::default())
                .unwrap();
        assert!(!result.found);
        assert!(result.route.is_empty());
    }

    #[test]
    fn test_route_result_propagates_unknown_location() {
        let graph = line_graph();
        let err = RouteResult::search(&graph, Strategy::Dfs, "A", "Q", &SearchOptions::default())
            .unwrap_err();
        assert!(matches!(err, RouteError::UnknownLocation { .. }));
    }

    #[test]
    fn test_route_result_serializes() {
        let graph = line_graph();
        let result =
            RouteResult::search(&graph, Strategy::Bfs, "A", "C", &SearchOptions::default())
                .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["strategy"], "bfs");
        assert_eq!(json["found"], true);
        assert_eq!(json["route"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(json["hops"], 2);
    }
}
