//! Graph search algorithm implementations
//!
//! Contains concrete implementations of the route searches:
//! - `bfs`: Breadth-first search, fewest hops
//! - `dfs`: Depth-first search, first route found
//! - `astar`: A* search, shortest distance
//! - `shared`: Common utilities used by multiple algorithms

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod shared;

pub use astar::{astar_find_route, astar_search};
pub use bfs::bfs_find_route;
pub use dfs::dfs_find_route;
pub use shared::{check_query, reconstruct_route, require_location, sorted_neighbors};
