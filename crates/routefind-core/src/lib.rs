//! Routefind Core Library
//!
//! Location graph, route searches (breadth-first, depth-first, A*) and the
//! dataset, query and configuration plumbing around them.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod query;
