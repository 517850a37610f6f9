use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{Result, RouteError};

/// A named, geocoded point in the graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Unique, case-sensitive key
    pub name: String,
    /// Informational region label (e.g. a state code)
    pub region: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Adjacent location names, in the order the edges were added
    pub neighbors: Vec<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, region: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            lat,
            lon,
            neighbors: Vec::new(),
        }
    }

    pub fn has_neighbor(&self, name: &str) -> bool {
        self.neighbors.iter().any(|n| n == name)
    }

    /// Add a neighbor name; returns false if it was already present
    fn add_neighbor(&mut self, name: &str) -> bool {
        if self.has_neighbor(name) {
            return false;
        }
        self.neighbors.push(name.to_string());
        true
    }
}

/// Undirected graph of locations keyed by name.
///
/// Immutable once built: every constructor checks that names are unique,
/// that no location lists itself, and that adjacency is closed and
/// symmetric.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    locations: HashMap<String, Location>,
}

impl LocationGraph {
    /// Build a graph from fully-populated locations, verifying its invariants
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        let mut map: HashMap<String, Location> = HashMap::with_capacity(locations.len());
        for location in locations {
            if map.contains_key(&location.name) {
                return Err(RouteError::DuplicateLocation {
                    name: location.name,
                });
            }
            map.insert(location.name.clone(), location);
        }

        let graph = Self { locations: map };
        graph.verify()?;
        Ok(graph)
    }

    fn verify(&self) -> Result<()> {
        // Sorted so the first reported violation does not depend on hash order
        for name in self.names() {
            let location = &self.locations[name];
            let mut seen: HashSet<&str> = HashSet::new();
            for neighbor in &location.neighbors {
                if neighbor == name {
                    return Err(RouteError::SelfLoop {
                        name: name.to_string(),
                    });
                }
                if !seen.insert(neighbor.as_str()) {
                    continue;
                }
                let Some(other) = self.locations.get(neighbor) else {
                    return Err(RouteError::DanglingEdge {
                        from: name.to_string(),
                        to: neighbor.clone(),
                    });
                };
                if !other.has_neighbor(name) {
                    return Err(RouteError::AsymmetricEdge {
                        from: name.to_string(),
                        to: neighbor.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All location names in ascending order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locations.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.locations
            .values()
            .map(|l| l.neighbors.len())
            .sum::<usize>()
            / 2
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }
}

/// Incremental construction of a [`LocationGraph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location with no neighbors yet
    pub fn add_location(&mut self, location: Location) -> Result<&mut Self> {
        if self.index.contains_key(&location.name) {
            return Err(RouteError::DuplicateLocation {
                name: location.name,
            });
        }
        self.index
            .insert(location.name.clone(), self.locations.len());
        self.locations.push(location);
        Ok(self)
    }

    /// Connect two existing locations with an undirected edge.
    ///
    /// Adding the same edge twice is a no-op.
    pub fn connect(&mut self, a: &str, b: &str) -> Result<&mut Self> {
        if a == b {
            return Err(RouteError::SelfLoop {
                name: a.to_string(),
            });
        }
        let ia = *self
            .index
            .get(a)
            .ok_or_else(|| RouteError::unknown_location(a))?;
        let ib = *self
            .index
            .get(b)
            .ok_or_else(|| RouteError::unknown_location(b))?;
        self.locations[ia].add_neighbor(b);
        self.locations[ib].add_neighbor(a);
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn build(self) -> Result<LocationGraph> {
        LocationGraph::new(self.locations)
    }
}

/// Tuning knobs for the A* search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Expand each location at most once, keeping the best known cost.
    /// When false every path reaching a location is queued again.
    pub closed_set: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { closed_set: true }
    }
}

/// Ordered location names from start to goal, both inclusive.
///
/// Never empty; a single element means start and goal are the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route(Vec<String>);

impl Route {
    /// Create a route from an ordered list of names
    pub fn from_names(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(RouteError::invalid_value("route", "empty"));
        }
        Ok(Route(names))
    }

    /// Route consisting of a single location
    pub fn single(name: &str) -> Self {
        Route(vec![name.to_string()])
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn start(&self) -> &str {
        &self.0[0]
    }

    pub fn goal(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Number of edges walked
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}
