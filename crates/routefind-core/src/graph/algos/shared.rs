use crate::error::{Result, RouteError};
use crate::graph::types::{Location, Route};
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// Predecessor links recorded by BFS and DFS, `None` for the start
pub type Predecessors = HashMap<String, Option<String>>;

/// Look up a location, failing fast on unknown names
pub fn require_location<'a>(provider: &'a dyn GraphProvider, name: &str) -> Result<&'a Location> {
    provider
        .location(name)
        .ok_or_else(|| RouteError::unknown_location(name))
}

/// Both query endpoints must be keys of the graph
pub fn check_query(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<()> {
    require_location(provider, from)?;
    require_location(provider, to)?;
    Ok(())
}

/// Snapshot of a location's neighbors sorted by ascending name.
///
/// Every neighbor must resolve to a location; a dangling name is an error
/// rather than a silently skipped edge.
pub fn sorted_neighbors(provider: &dyn GraphProvider, name: &str) -> Result<Vec<String>> {
    let mut neighbors = provider
        .neighbors(name)
        .ok_or_else(|| RouteError::unknown_location(name))?;
    neighbors.sort_unstable();
    neighbors.dedup();

    if let Some(missing) = neighbors.iter().find(|n| provider.location(n).is_none()) {
        return Err(RouteError::DanglingEdge {
            from: name.to_string(),
            to: missing.clone(),
        });
    }

    Ok(neighbors)
}

/// Walk predecessor links from `to` back to `from` and return the route in
/// start-to-goal order
pub fn reconstruct_route(from: &str, to: &str, predecessors: &Predecessors) -> Result<Route> {
    let mut names = vec![to.to_string()];
    let mut current = to;

    while current != from {
        // A chain longer than the map has a cycle in it
        if names.len() > predecessors.len() {
            return Err(RouteError::Other(format!(
                "predecessor chain from {to} does not reach {from}"
            )));
        }
        match predecessors.get(current) {
            Some(Some(pred)) => {
                names.push(pred.clone());
                current = pred;
            }
            _ => {
                return Err(RouteError::Other(format!(
                    "predecessor chain from {to} breaks at {current}"
                )));
            }
        }
    }

    names.reverse();
    Route::from_names(names)
}
