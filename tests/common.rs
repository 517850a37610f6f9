use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub fn routefind() -> Command {
    cargo_bin_cmd!("routefind")
}

pub const CITIES: &str = "\
Albany NY 42.65 -73.75
Boston MA 42.36 -71.06
Hartford CT 41.76 -72.68
NewYork NY 40.71 -74.01
Providence RI 41.82 -71.41
Honolulu HI 21.31 -157.86
";

pub const EDGES: &str = "\
Albany Boston
Albany Hartford
Albany NewYork
Boston Providence
Hartford NewYork
Hartford Providence
";

/// Write `city.dat` and `edge.dat` into `dir`
pub fn write_dataset(dir: &Path) {
    fs::write(dir.join("city.dat"), CITIES).unwrap();
    fs::write(dir.join("edge.dat"), EDGES).unwrap();
}

/// Write a query file into `dir` and return its path
#[allow(dead_code)]
pub fn write_query(dir: &Path, start: &str, goal: &str) -> std::path::PathBuf {
    let path = dir.join("query.txt");
    fs::write(&path, format!("{start} {goal}\n")).unwrap();
    path
}
