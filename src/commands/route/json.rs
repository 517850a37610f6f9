use routefind_core::error::Result;
use routefind_core::graph::RouteResult;

/// JSON array with one object per strategy; distance rounded to whole units
pub fn render(results: &[RouteResult]) -> Result<String> {
    let json_output: Vec<serde_json::Value> = results
        .iter()
        .map(|result| {
            serde_json::json!({
                "strategy": result.strategy,
                "from": result.from,
                "to": result.to,
                "found": result.found,
                "route": result.route,
                "hops": result.hops,
                "distance": result.rounded_distance(),
            })
        })
        .collect();
    let mut out = serde_json::to_string_pretty(&json_output)?;
    out.push('\n');
    Ok(out)
}
