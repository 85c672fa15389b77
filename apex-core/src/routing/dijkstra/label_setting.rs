use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use super::state::{Predecessor, SearchState, State};
use crate::RoadGraph;

/// Dijkstra over precomputed, non-negative edge scores.
///
/// `edge_scores` is indexed by edge index. The search stops as soon as
/// `target` is popped from the heap, or when the heap runs dry.
pub(crate) fn label_setting_search(
    graph: &RoadGraph,
    edge_scores: &[f64],
    start: NodeIndex,
    target: NodeIndex,
) -> SearchState {
    let mut state = SearchState::new(graph.node_count(), start);
    let mut heap = BinaryHeap::with_capacity(graph.node_count().min(1024));

    heap.push(State {
        cost: 0.0,
        id: graph.node_at(start).id,
        node: start,
    });

    while let Some(State { cost, node, .. }) = heap.pop() {
        if node == target {
            break;
        }

        // Stale entry for a node that was already expanded
        if state.settled.put(node.index()) {
            continue;
        }

        for edge in graph.outgoing(node) {
            let next = edge.target();
            let next_cost = cost + edge_scores[edge.id().index()];
            let via = Predecessor {
                node,
                edge: edge.id(),
            };

            if state.relax(next, next_cost, via) {
                heap.push(State {
                    cost: next_cost,
                    id: graph.node_at(next).id,
                    node: next,
                });
            }
        }
    }

    state
}
