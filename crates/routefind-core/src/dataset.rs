//! Loading the city and edge files into a [`LocationGraph`]
//!
//! Both files are streams of whitespace-separated tokens; records may span
//! or share lines:
//! - cities: `name region lat lon`
//! - edges: `name name`

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::DatasetConfig;
use crate::error::{Result, RouteError};
use crate::graph::{GraphBuilder, Location, LocationGraph};

/// A token and the 1-based line it came from
struct Token<'a> {
    text: &'a str,
    line: usize,
}

fn tokenize(content: &str) -> Vec<Token<'_>> {
    content
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| {
            line.split_whitespace()
                .map(move |text| Token { text, line: idx + 1 })
        })
        .collect()
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| RouteError::io_operation("read", path.display(), e))
}

fn parse_coordinate(path: &Path, token: &Token<'_>, what: &str) -> Result<f64> {
    match token.text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RouteError::parse(
            path,
            token.line,
            format!("invalid {what}: {}", token.text),
        )),
    }
}

/// Parse city records and add them to `builder`
pub fn parse_cities(builder: &mut GraphBuilder, path: &Path, content: &str) -> Result<usize> {
    let tokens = tokenize(content);
    let mut records = tokens.chunks_exact(4);

    let mut count = 0;
    for record in records.by_ref() {
        let (name, region, lat, lon) = (&record[0], &record[1], &record[2], &record[3]);
        let lat = parse_coordinate(path, lat, "latitude")?;
        let lon = parse_coordinate(path, lon, "longitude")?;

        builder
            .add_location(Location::new(name.text, region.text, lat, lon))
            .map_err(|e| match e {
                RouteError::DuplicateLocation { name: dup } => {
                    RouteError::parse(path, name.line, format!("duplicate city: {dup}"))
                }
                other => other,
            })?;
        count += 1;
    }

    if let Some(first) = records.remainder().first() {
        crate::bail_parse!(
            path,
            first.line,
            format!("incomplete city record starting at {}", first.text)
        );
    }

    Ok(count)
}

/// Parse edge records, connecting cities already in `builder`
pub fn parse_edges(builder: &mut GraphBuilder, path: &Path, content: &str) -> Result<usize> {
    let tokens = tokenize(content);
    let mut pairs = tokens.chunks_exact(2);

    let mut count = 0;
    for pair in pairs.by_ref() {
        let (a, b) = (&pair[0], &pair[1]);
        for end in [a, b] {
            if !builder.contains(end.text) {
                crate::bail_parse!(path, end.line, format!("unknown city: {}", end.text));
            }
        }
        if a.text == b.text {
            crate::bail_parse!(path, a.line, format!("self-loop edge: {}", a.text));
        }
        builder.connect(a.text, b.text)?;
        count += 1;
    }

    if let Some(first) = pairs.remainder().first() {
        crate::bail_parse!(
            path,
            first.line,
            format!("edge starting at {} has no second city", first.text)
        );
    }

    Ok(count)
}

/// Build the full graph from the configured city and edge files
#[tracing::instrument(fields(cities = %config.cities.display(), edges = %config.edges.display()))]
pub fn load_graph(config: &DatasetConfig) -> Result<LocationGraph> {
    let start = Instant::now();
    let mut builder = GraphBuilder::new();

    let cities = read_file(&config.cities)?;
    let city_count = parse_cities(&mut builder, &config.cities, &cities)?;

    let edges = read_file(&config.edges)?;
    let edge_count = parse_edges(&mut builder, &config.edges, &edges)?;

    let graph = builder.build()?;
    tracing::debug!(
        cities = city_count,
        edge_records = edge_count,
        edges = graph.edge_count(),
        "graph_loaded"
    );
    crate::trace_time!(start, "load_graph");
    Ok(graph)
}
