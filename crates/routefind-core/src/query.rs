//! Reading and validating a start/destination query

use std::io::BufRead;

use serde::Serialize;

use crate::error::{Result, RouteError};
use crate::graph::LocationGraph;

/// A start and destination pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub start: String,
    pub goal: String,
}

impl Query {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }

    /// Both names must be locations of `graph`; the first unknown one is
    /// reported
    pub fn validate(&self, graph: &LocationGraph) -> Result<()> {
        for name in [&self.start, &self.goal] {
            if !validate_query(graph, name) {
                return Err(RouteError::unknown_location(name.as_str()));
            }
        }
        Ok(())
    }
}

/// Whether `name` is a location of `graph`
pub fn validate_query(graph: &LocationGraph, name: &str) -> bool {
    graph.contains(name)
}

/// Read the first two whitespace-separated tokens as start and destination.
///
/// Reading stops as soon as both names are known, so an interactive reader
/// is not drained. `source` names the input in error messages.
pub fn read_query<R: BufRead>(reader: R, source: &str) -> Result<Query> {
    let mut names: Vec<String> = Vec::with_capacity(2);
    let mut last_line = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| RouteError::io_operation("read", source, e))?;
        last_line = idx + 1;
        for token in line.split_whitespace() {
            names.push(token.to_string());
            if names.len() == 2 {
                let goal = names.pop().unwrap_or_default();
                let start = names.pop().unwrap_or_default();
                return Ok(Query { start, goal });
            }
        }
    }

    let reason = if names.is_empty() {
        "expected a start and a destination city".to_string()
    } else {
        format!("missing destination after {}", names[0])
    };
    Err(RouteError::parse(source, last_line, reason))
}
