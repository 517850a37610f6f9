use std::fmt::Write;

use routefind_core::graph::RouteResult;
use routefind_core::query::Query;

/// Line-oriented output: a header, then an `S` line per strategy followed
/// by its `N` lines
pub fn render(query: &Query, results: &[RouteResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "H routefind=1 records=1 mode=route from={} to={} strategies={}",
        query.start,
        query.goal,
        results.len()
    );
    for result in results {
        let _ = writeln!(
            out,
            "S {} found={} hops={} distance={}",
            result.strategy,
            result.found,
            result.hops,
            result.rounded_distance()
        );
        for (idx, name) in result.route.iter().enumerate() {
            let _ = writeln!(out, "N {} {}", idx, name);
        }
    }
    out
}
