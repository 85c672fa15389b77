use petgraph::graph::NodeIndex;
use serde::Serialize;

use super::dijkstra::SearchState;
use super::normalization::CostModel;
use crate::{NodeId, RoadGraph};

/// A node on a reconstructed route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathNode {
    pub id: NodeId,
    pub name: String,
    /// Unified score accumulated from the start up to this node
    pub cumulative_score: f64,
}

/// Physical totals over the traversed edges
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RouteTotals {
    pub distance_km: f64,
    pub travel_time_min: f64,
    pub monetary_cost: f64,
}

/// Best route between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePath {
    /// Nodes from start to end, both included
    pub nodes: Vec<PathNode>,
    /// Optimality score, lower is better. Zero only when start equals end.
    pub score: f64,
    pub totals: RouteTotals,
}

impl RoutePath {
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|node| node.id).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.name.as_str()).collect()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Walks predecessor links back from `end`.
///
/// Returns `None` when the chain does not lead back to `start`, so a partial
/// path is never reported.
pub(crate) fn reconstruct_path(
    graph: &RoadGraph,
    state: &SearchState,
    cost_model: &CostModel,
    start: NodeIndex,
    end: NodeIndex,
) -> Option<RoutePath> {
    let mut node_path = vec![end];
    let mut totals = RouteTotals::default();
    let mut current = end;

    while current != start {
        let pred = state.predecessor(current)?;
        let edge = graph.edge(pred.edge);
        totals.distance_km += edge.distance;
        totals.travel_time_min += edge.travel_time();
        totals.monetary_cost += cost_model.monetary_cost(edge);

        node_path.push(pred.node);
        current = pred.node;
    }
    node_path.reverse(); // Now path is from start to end

    let nodes = node_path
        .into_iter()
        .map(|idx| {
            let node = graph.node_at(idx);
            PathNode {
                id: node.id,
                name: node.name.clone(),
                cumulative_score: state.g_cost(idx),
            }
        })
        .collect();

    Some(RoutePath {
        nodes,
        score: state.g_cost(end),
        totals,
    })
}
