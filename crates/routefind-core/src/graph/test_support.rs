//! Small graphs shared by the search tests

use crate::graph::types::{GraphBuilder, Location, LocationGraph};

pub fn build(locations: &[(&str, f64, f64)], edges: &[(&str, &str)]) -> LocationGraph {
    let mut builder = GraphBuilder::new();
    for &(name, lat, lon) in locations {
        builder
            .add_location(Location::new(name, "XX", lat, lon))
            .unwrap();
    }
    for &(a, b) in edges {
        builder.connect(a, b).unwrap();
    }
    builder.build().unwrap()
}

/// A(0,0) - B(0,1) - C(1,1)
pub fn line_graph() -> LocationGraph {
    build(
        &[("A", 0.0, 0.0), ("B", 0.0, 1.0), ("C", 1.0, 1.0)],
        &[("A", "B"), ("B", "C")],
    )
}

/// Two routes from A to E: A-B-C-E (3 hops, 300) and A-D-E (2 hops, ~241)
pub fn grid() -> LocationGraph {
    build(
        &[
            ("A", 0.0, 0.0),
            ("B", 0.0, 1.0),
            ("C", 0.0, 2.0),
            ("D", 1.0, 1.0),
            ("E", 1.0, 2.0),
        ],
        &[("A", "B"), ("A", "D"), ("B", "C"), ("C", "E"), ("D", "E")],
    )
}

/// Few hops via a long detour (S-X-G, ~1414) or many hops along a straight
/// line (S-P1-P2-P3-G, 1000)
pub fn detour() -> LocationGraph {
    build(
        &[
            ("S", 0.0, 0.0),
            ("X", 5.0, 5.0),
            ("P1", 0.0, 2.5),
            ("P2", 0.0, 5.0),
            ("P3", 0.0, 7.5),
            ("G", 0.0, 10.0),
        ],
        &[
            ("S", "X"),
            ("X", "G"),
            ("S", "P1"),
            ("P1", "P2"),
            ("P2", "P3"),
            ("P3", "G"),
        ],
    )
}

/// Triangle A-B-C and a separate edge X-Y
pub fn two_islands() -> LocationGraph {
    build(
        &[
            ("A", 0.0, 0.0),
            ("B", 0.0, 1.0),
            ("C", 1.0, 0.0),
            ("X", 5.0, 5.0),
            ("Y", 5.0, 6.0),
        ],
        &[("A", "B"), ("B", "C"), ("C", "A"), ("X", "Y")],
    )
}

/// 4x4 lattice with slightly jittered coordinates and a few diagonals
pub fn mesh() -> LocationGraph {
    let mut builder = GraphBuilder::new();
    let name = |r: usize, c: usize| format!("N{r}{c}");
    for r in 0..4 {
        for c in 0..4 {
            let jitter = ((r * 7 + c * 3) % 5) as f64 * 0.07;
            builder
                .add_location(Location::new(
                    name(r, c),
                    "XX",
                    r as f64 + jitter,
                    c as f64 - jitter,
                ))
                .unwrap();
        }
    }
    for r in 0..4 {
        for c in 0..4 {
            if c + 1 < 4 {
                builder.connect(&name(r, c), &name(r, c + 1)).unwrap();
            }
            if r + 1 < 4 {
                builder.connect(&name(r, c), &name(r + 1, c)).unwrap();
            }
            if r + 1 < 4 && c + 1 < 4 && (r + c) % 2 == 0 {
                builder.connect(&name(r, c), &name(r + 1, c + 1)).unwrap();
            }
        }
    }
    builder.build().unwrap()
}

/// Every route step must be an edge of the graph
pub fn assert_walks_edges(graph: &LocationGraph, names: &[String]) {
    for pair in names.windows(2) {
        let loc = graph.get(&pair[0]).unwrap();
        assert!(
            loc.has_neighbor(&pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

/// All-pairs (min hops, min distance) by Floyd-Warshall
pub fn all_pairs(graph: &LocationGraph) -> (Vec<String>, Vec<Vec<usize>>, Vec<Vec<f64>>) {
    let names: Vec<String> = graph.names().into_iter().map(String::from).collect();
    let n = names.len();
    let mut hops = vec![vec![usize::MAX / 4; n]; n];
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for i in 0..n {
        hops[i][i] = 0;
        dist[i][i] = 0.0;
        let a = graph.get(&names[i]).unwrap();
        for (j, other) in names.iter().enumerate() {
            if a.has_neighbor(other) {
                hops[i][j] = 1;
                dist[i][j] = crate::graph::distance(a, graph.get(other).unwrap());
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if hops[i][k] + hops[k][j] < hops[i][j] {
                    hops[i][j] = hops[i][k] + hops[k][j];
                }
                if dist[i][k] + dist[k][j] < dist[i][j] {
                    dist[i][j] = dist[i][k] + dist[k][j];
                }
            }
        }
    }
    (names, hops, dist)
}
