use crate::error::{Result, RouteError};
use crate::graph::algos::shared::{check_query, reconstruct_route, sorted_neighbors, Predecessors};
use crate::graph::types::Route;
use crate::graph::GraphProvider;
use crate::logging::SearchStats;
use std::collections::VecDeque;

/// Find the route with the fewest hops between two locations.
///
/// Neighbors are examined in ascending name order, so among equally short
/// routes the one through the smallest names wins. A goal adjacent to the
/// node being expanded jumps to the front of the queue.
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn bfs_find_route(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<Route> {
    check_query(provider, from, to)?;
    if from == to {
        return Ok(Route::single(from));
    }

    let mut stats = SearchStats::new();
    let mut predecessors: Predecessors = Predecessors::new();
    let mut queue: VecDeque<String> = VecDeque::new();

    predecessors.insert(from.to_string(), None);
    queue.push_back(from.to_string());
    stats.record_enqueue();

    while let Some(current) = queue.pop_front() {
        if current == to {
            crate::log_search_stats!(stats, "bfs");
            return reconstruct_route(from, to, &predecessors);
        }
        stats.record_expansion();

        let neighbors = sorted_neighbors(provider, &current)?;

        if !predecessors.contains_key(to) && neighbors.iter().any(|n| n == to) {
            predecessors.insert(to.to_string(), Some(current));
            queue.push_front(to.to_string());
            stats.record_enqueue();
            continue;
        }

        for neighbor in neighbors {
            if predecessors.contains_key(&neighbor) {
                continue;
            }
            predecessors.insert(neighbor.clone(), Some(current.clone()));
            queue.push_back(neighbor);
            stats.record_enqueue();
        }
    }

    crate::log_search_stats!(stats, "bfs");
    Err(RouteError::path_not_found(from, to))
}
