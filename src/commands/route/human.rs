use std::fmt::Write;

use routefind_core::graph::RouteResult;

/// Classic report: one block per strategy, separated by blank lines
pub fn render(results: &[RouteResult], unit: &str) -> String {
    let mut out = String::new();
    for (idx, result) in results.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} Results:", result.strategy.title());
        if !result.found {
            let _ = writeln!(out, "No route from {} to {}.", result.from, result.to);
            continue;
        }
        for name in &result.route {
            let _ = writeln!(out, "{}", name);
        }
        let _ = writeln!(out, "That took {} hops to find.", result.hops);
        let _ = writeln!(
            out,
            "Total distance = {} {}.",
            result.rounded_distance(),
            unit
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use routefind_core::graph::Strategy;

    fn found() -> RouteResult {
        RouteResult {
            strategy: Strategy::Bfs,
            from: "A".into(),
            to: "C".into(),
            found: true,
            route: vec!["A".into(), "B".into(), "C".into()],
            hops: 2,
            distance: 199.6,
        }
    }

    #[test]
    fn test_render_found() {
        let out = render(&[found()], "miles");
        assert_eq!(
            out,
            "Breadth-First Search Results:\nA\nB\nC\nThat took 2 hops to find.\nTotal distance = 200 miles.\n"
        );
    }

    #[test]
    fn test_render_not_found_and_separator() {
        let mut missing = found();
        missing.strategy = Strategy::Astar;
        missing.found = false;
        missing.route.clear();

        let out = render(&[found(), missing], "km");
        assert!(out.contains("Total distance = 200 km.\n\nA* Search Results:\nNo route from A to C.\n"));
    }
}
