use crate::graph::types::{Location, LocationGraph};

/// Trait for providing location records and adjacency to the searches
pub trait GraphProvider {
    fn location(&self, name: &str) -> Option<&Location>;

    /// Owned copy of a location's neighbor names, in storage order
    fn neighbors(&self, name: &str) -> Option<Vec<String>> {
        self.location(name).map(|l| l.neighbors.clone())
    }
}

impl GraphProvider for LocationGraph {
    fn location(&self, name: &str) -> Option<&Location> {
        self.get(name)
    }
}
