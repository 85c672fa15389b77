//! Text rendering of routing results

use apex_core::{NormalizationBounds, RoadGraph, RoutePath};

pub fn render_path(path: &RoutePath) -> String {
    let mut out = String::from("--- Recommended Optimal Path ---\nPath:\n");
    for (i, node) in path.nodes.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, node.name));
    }
    out.push_str(&format!(
        "\nOptimality Score: {:.6} (lower is better)\n",
        path.score
    ));
    out.push_str(&format!(
        "Distance: {:.2} km | Time: {:.1} min | Cost: {:.2}\n",
        path.totals.distance_km, path.totals.travel_time_min, path.totals.monetary_cost
    ));
    out
}

pub fn render_no_path() -> String {
    "--- Recommended Optimal Path ---\nNo path found.\n".to_string()
}

pub fn render_network_info(graph: &RoadGraph, bounds: &NormalizationBounds) -> String {
    format!(
        "Nodes:          {}\n\
         Road segments:  {}\n\
         Longest leg:    {:.2} km\n\
         Slowest leg:    {:.1} min\n\
         Priciest leg:   {:.2}\n",
        graph.node_count(),
        graph.edge_count() / 2,
        bounds.max_distance,
        bounds.max_time,
        bounds.max_cost
    )
}
