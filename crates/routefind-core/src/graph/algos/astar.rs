use crate::error::{Result, RouteError};
use crate::graph::algos::shared::{check_query, require_location, sorted_neighbors};
use crate::graph::distance::distance;
use crate::graph::types::{Route, SearchOptions};
use crate::graph::GraphProvider;
use crate::logging::SearchStats;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// A search node stored in the per-search arena
#[derive(Debug, Clone)]
struct SearchNode {
    name: String,
    /// Arena index of the predecessor; `None` for the start node
    parent: Option<usize>,
    g: f64,
}

/// Frontier entry; wrapped in `Reverse` so the heap pops the lowest `f`
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub f: f64,
    /// Insertion order, breaks ties between equal `f`
    pub seq: u64,
    pub node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during an A* search
struct AstarState {
    arena: Vec<SearchNode>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
    best_g: HashMap<String, f64>,
    closed: HashSet<String>,
    stats: SearchStats,
}

impl AstarState {
    fn new() -> Self {
        Self {
            arena: Vec::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
            best_g: HashMap::new(),
            closed: HashSet::new(),
            stats: SearchStats::new(),
        }
    }

    fn push(&mut self, name: String, parent: Option<usize>, g: f64, h: f64) {
        let node = self.arena.len();
        self.arena.push(SearchNode { name, parent, g });
        self.heap.push(Reverse(HeapEntry {
            f: g + h,
            seq: self.next_seq,
            node,
        }));
        self.next_seq += 1;
        self.stats.record_enqueue();
    }

    /// Whether `name` already appears on the chain ending at `node`
    fn on_chain(&self, node: usize, name: &str) -> bool {
        let mut cursor = Some(node);
        while let Some(idx) = cursor {
            if self.arena[idx].name == name {
                return true;
            }
            cursor = self.arena[idx].parent;
        }
        false
    }

    fn reconstruct(&self, goal_node: usize) -> Result<Route> {
        let mut names = Vec::new();
        let mut cursor = Some(goal_node);
        while let Some(idx) = cursor {
            names.push(self.arena[idx].name.clone());
            cursor = self.arena[idx].parent;
        }
        names.reverse();
        Route::from_names(names)
    }
}

/// Find the shortest-distance route with A* and the default options
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn astar_find_route(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<Route> {
    astar_search(provider, from, to, &SearchOptions::default())
}

/// A* search ordered by `f = g + h`, both measured with [`distance`].
///
/// With `opts.closed_set` each location is expanded at most once and only
/// improving successors are queued. Without it, successors are queued
/// again for every path that reaches them, except names already on the
/// node's own chain.
#[tracing::instrument(skip(provider, opts), fields(from = %from, to = %to, closed_set = opts.closed_set))]
pub fn astar_search(
    provider: &dyn GraphProvider,
    from: &str,
    to: &str,
    opts: &SearchOptions,
) -> Result<Route> {
    check_query(provider, from, to)?;
    if from == to {
        return Ok(Route::single(from));
    }

    let goal = require_location(provider, to)?;
    let start = require_location(provider, from)?;

    let mut state = AstarState::new();
    state.best_g.insert(from.to_string(), 0.0);
    state.push(from.to_string(), None, 0.0, distance(start, goal));

    while let Some(Reverse(entry)) = state.heap.pop() {
        let current = entry.node;
        let current_name = state.arena[current].name.clone();

        if current_name == to {
            crate::log_search_stats!(state.stats, "astar");
            return state.reconstruct(current);
        }

        if opts.closed_set && !state.closed.insert(current_name.clone()) {
            // Stale entry for a location that was already expanded
            continue;
        }
        state.stats.record_expansion();

        let current_location = require_location(provider, &current_name)?;
        let current_g = state.arena[current].g;

        for neighbor in sorted_neighbors(provider, &current_name)? {
            if opts.closed_set {
                if state.closed.contains(&neighbor) {
                    continue;
                }
            } else if state.on_chain(current, &neighbor) {
                continue;
            }

            let location = require_location(provider, &neighbor)?;
            let g = current_g + distance(location, current_location);

            if opts.closed_set {
                if let Some(&best) = state.best_g.get(&neighbor) {
                    if g >= best {
                        continue;
                    }
                }
                state.best_g.insert(neighbor.clone(), g);
            }

            let h = distance(location, goal);
            state.push(neighbor, Some(current), g, h);
        }
    }

    crate::log_search_stats!(state.stats, "astar");
    Err(RouteError::path_not_found(from, to))
}
