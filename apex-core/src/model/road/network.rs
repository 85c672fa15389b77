//! Road network graph

use hashbrown::HashMap;
use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;

use super::components::{RoadEdge, RoadNode};
use crate::{Error, NodeId};

/// Road network where every segment is stored as two directed edges with
/// identical attributes.
///
/// Node IDs come from the map data and are resolved to dense petgraph
/// indices through `index`.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    pub(crate) graph: DiGraph<RoadNode, RoadEdge>,
    index: HashMap<NodeId, NodeIndex>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, replacing the name if the ID is already present
    pub fn add_node(&mut self, id: NodeId, name: impl Into<String>) {
        let name = name.into();
        match self.index.get(&id) {
            Some(&idx) => self.graph[idx].name = name,
            None => {
                let idx = self.graph.add_node(RoadNode { id, name });
                self.index.insert(id, idx);
            }
        }
    }

    /// Adds a road segment between `from` and `to` as a pair of mirrored
    /// directed edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either endpoint has not been added,
    /// and [`Error::InvalidEdge`] if an attribute is out of range.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        distance: f64,
        speed_limit: f64,
        traffic_multiplier: f64,
        toll: f64,
    ) -> Result<(), Error> {
        let from_idx = self.node_index(from)?;
        let to_idx = self.node_index(to)?;

        let forward = RoadEdge {
            to,
            distance,
            speed_limit,
            traffic_multiplier,
            toll,
        };
        forward.validate(from)?;

        let backward = RoadEdge {
            to: from,
            ..forward.clone()
        };

        self.graph.add_edge(from_idx, to_idx, forward);
        self.graph.add_edge(to_idx, from_idx, backward);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if no node has this ID.
    pub fn node(&self, id: NodeId) -> Result<&RoadNode, Error> {
        self.node_index(id).map(|idx| &self.graph[idx])
    }

    /// Outgoing edges of `id` in insertion order. Empty for unknown nodes.
    pub fn edges_from(&self, id: NodeId) -> Vec<&RoadEdge> {
        self.index
            .get(&id)
            .map(|&idx| self.outgoing(idx).map(|edge| edge.weight()).collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges (twice the number of road segments)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> {
        self.graph.node_weights()
    }

    /// All directed edges, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &RoadEdge> {
        self.graph.edge_weights()
    }

    pub(crate) fn node_index(&self, id: NodeId) -> Result<NodeIndex, Error> {
        self.index.get(&id).copied().ok_or(Error::UnknownNode(id))
    }

    /// Outgoing edges of a node in insertion order.
    ///
    /// petgraph walks a node's edge list newest first; sorting by edge index
    /// restores load order.
    pub(crate) fn outgoing(
        &self,
        idx: NodeIndex,
    ) -> impl Iterator<Item = EdgeReference<'_, RoadEdge>> {
        let mut edges: Vec<_> = self.graph.edges(idx).collect();
        edges.sort_unstable_by_key(|edge| edge.id());
        edges.into_iter()
    }

    pub(crate) fn edge(&self, idx: EdgeIndex) -> &RoadEdge {
        &self.graph[idx]
    }

    pub(crate) fn node_at(&self, idx: NodeIndex) -> &RoadNode {
        &self.graph[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> RoadGraph {
        let mut graph = RoadGraph::new();
        graph.add_node(1, "A");
        graph.add_node(2, "B");
        graph.add_node(3, "C");
        graph.add_edge(1, 2, 10.0, 50.0, 1.0, 0.0).unwrap();
        graph.add_edge(1, 3, 7.0, 90.0, 1.2, 2.0).unwrap();
        graph.add_edge(2, 3, 5.0, 50.0, 1.0, 0.0).unwrap();
        graph
    }

    #[test]
    fn add_node_is_last_write_wins() {
        let mut graph = RoadGraph::new();
        graph.add_node(1, "Old");
        graph.add_node(1, "New");

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node(1).unwrap().name, "New");
    }

    #[test]
    fn add_edge_mirrors_attributes() {
        let graph = triangle();
        assert_eq!(graph.edge_count(), 6);

        let forward = graph.edges_from(1)[1];
        let backward = graph.edges_from(3)[0];
        assert_eq!(forward.to, 3);
        assert_eq!(backward.to, 1);
        assert_eq!(forward.distance, backward.distance);
        assert_eq!(forward.speed_limit, backward.speed_limit);
        assert_eq!(forward.traffic_multiplier, backward.traffic_multiplier);
        assert_eq!(forward.toll, backward.toll);
    }

    #[test]
    fn edges_from_keeps_insertion_order() {
        let graph = triangle();
        let targets: Vec<_> = graph.edges_from(1).iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![2, 3]);

        let targets: Vec<_> = graph.edges_from(3).iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![1, 2]);
    }

    #[test]
    fn edges_from_unknown_or_isolated_is_empty() {
        let mut graph = triangle();
        graph.add_node(4, "D");
        assert!(graph.edges_from(4).is_empty());
        assert!(graph.edges_from(99).is_empty());
    }

    #[test]
    fn node_lookup_fails_for_unknown_id() {
        let graph = triangle();
        assert!(matches!(graph.node(42), Err(Error::UnknownNode(42))));
    }

    #[test]
    fn dangling_edges_are_rejected() {
        let mut graph = triangle();
        let result = graph.add_edge(1, 9, 1.0, 30.0, 1.0, 0.0);
        assert!(matches!(result, Err(Error::UnknownNode(9))));
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn invalid_edges_leave_graph_untouched() {
        let mut graph = triangle();
        let result = graph.add_edge(1, 2, -3.0, 30.0, 1.0, 0.0);
        assert!(matches!(result, Err(Error::InvalidEdge { from: 1, to: 2, .. })));
        assert_eq!(graph.edge_count(), 6);
    }
}
