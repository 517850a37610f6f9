use crate::graph::types::Location;

/// Scale applied to the planar coordinate distance
pub const DISTANCE_SCALE: f64 = 100.0;

/// Planar Euclidean distance between two locations, scaled by [`DISTANCE_SCALE`].
///
/// Symmetric, zero iff the coordinates match, and obeys the triangle
/// inequality, so it is both the edge cost and a consistent A* heuristic.
#[inline]
pub fn distance(a: &Location, b: &Location) -> f64 {
    ((a.lat - b.lat).powi(2) + (a.lon - b.lon).powi(2)).sqrt() * DISTANCE_SCALE
}
