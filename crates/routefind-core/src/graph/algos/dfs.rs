use crate::error::{Result, RouteError};
use crate::graph::algos::shared::{check_query, reconstruct_route, sorted_neighbors, Predecessors};
use crate::graph::types::Route;
use crate::graph::GraphProvider;
use crate::logging::SearchStats;

/// Find the first route reached by depth-first exploration.
///
/// Unvisited neighbors are pushed in descending name order so the smallest
/// name is explored next. The route is deterministic but not necessarily
/// the shortest.
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn dfs_find_route(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<Route> {
    check_query(provider, from, to)?;
    if from == to {
        return Ok(Route::single(from));
    }

    let mut stats = SearchStats::new();
    let mut predecessors: Predecessors = Predecessors::new();
    let mut stack: Vec<String> = Vec::new();

    predecessors.insert(from.to_string(), None);
    stack.push(from.to_string());
    stats.record_enqueue();

    while let Some(current) = stack.pop() {
        if current == to {
            crate::log_search_stats!(stats, "dfs");
            return reconstruct_route(from, to, &predecessors);
        }
        stats.record_expansion();

        let neighbors = sorted_neighbors(provider, &current)?;

        if !predecessors.contains_key(to) && neighbors.iter().any(|n| n == to) {
            predecessors.insert(to.to_string(), Some(current));
            stack.push(to.to_string());
            stats.record_enqueue();
            continue;
        }

        for neighbor in neighbors.into_iter().rev() {
            if predecessors.contains_key(&neighbor) {
                continue;
            }
            predecessors.insert(neighbor.clone(), Some(current.clone()));
            stack.push(neighbor);
            stats.record_enqueue();
        }
    }

    crate::log_search_stats!(stats, "dfs");
    Err(RouteError::path_not_found(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::{grid, line_graph, two_islands};
    use crate::graph::algos::bfs_find_route;

    #[test]
    fn test_dfs_line() {
        let graph = line_graph();
        let route = dfs_find_route(&graph, "A", "C").unwrap();
        assert_eq!(route.names(), &["A", "B", "C"]);
    }

    #[test]
    fn test_dfs_follows_smallest_name_first() {
        // A-B, A-D, B-C, C-E, D-E: depth-first from A goes A,B,C then E
        // even though A,D,E has the same length
        let graph = grid();
        let route = dfs_find_route(&graph, "A", "E").unwrap();
        assert_eq!(route.names(), &["A", "B", "C", "E"]);

        let shortest = bfs_find_route(&graph, "A", "E").unwrap();
        assert_eq!(shortest.names(), &["A", "D", "E"]);
    }

    #[test]
    fn test_dfs_adjacent_goal_shortcut() {
        let graph = grid();
        let route = dfs_find_route(&graph, "A", "D").unwrap();
        assert_eq!(route.names(), &["A", "D"]);
    }

    #[test]
    fn test_dfs_same_start_and_goal() {
        let graph = line_graph();
        let route = dfs_find_route(&graph, "B", "B").unwrap();
        assert_eq!(route.names(), &["B"]);
    }

    #[test]
    fn test_dfs_unreachable() {
        let graph = two_islands();
        let err = dfs_find_route(&graph, "A", "X").unwrap_err();
        assert!(err.is_path_not_found());
    }

    #[test]
    fn test_dfs_unknown_goal() {
        let graph = line_graph();
        let err = dfs_find_route(&graph, "A", "Nowhere").unwrap_err();
        assert!(matches!(err, RouteError::UnknownLocation { .. }));
    }

    #[test]
    fn test_dfs_is_deterministic() {
        let graph = grid();
        let first = dfs_find_route(&graph, "E", "A").unwrap();
        for _ in 0..10 {
            assert_eq!(dfs_find_route(&graph, "E", "A").unwrap(), first);
        }
    }
}
