use log::info;

use super::raw_types::{MapEdge, MapNode};
use crate::{Error, RoadGraph};

/// Builds a graph from raw records: all nodes first, then every edge as a
/// mirrored pair. The first bad edge aborts the build.
pub(super) fn build_road_graph(nodes: Vec<MapNode>, edges: Vec<MapEdge>) -> Result<RoadGraph, Error> {
    let mut graph = RoadGraph::new();

    for node in nodes {
        graph.add_node(node.id, node.name);
    }

    for (position, edge) in edges.into_iter().enumerate() {
        graph
            .add_edge(
                edge.from,
                edge.to,
                edge.distance,
                edge.speed_limit,
                edge.traffic,
                edge.toll,
            )
            .map_err(|e| {
                Error::InvalidData(format!(
                    "edge #{position} ({} -> {}) rejected: {e}",
                    edge.from, edge.to
                ))
            })?;
    }

    info!(
        "Road network loaded: {} nodes, {} directed edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}
