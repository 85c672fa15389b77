use std::cmp::Ordering;

use fixedbitset::FixedBitSet;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::NodeId;

/// Heap entry keyed by tentative cumulative score
#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) struct State {
    pub(super) cost: f64,
    /// Map ID of `node`, used to order equal scores
    pub(super) id: NodeId,
    pub(super) node: NodeIndex,
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // ties broken towards the lower node ID
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Node and edge through which a node was reached
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Predecessor {
    pub(crate) node: NodeIndex,
    pub(crate) edge: EdgeIndex,
}

/// Labels of a single query. Built fresh for every search and dropped once
/// the path has been reconstructed.
#[derive(Debug)]
pub(crate) struct SearchState {
    pub(crate) g_costs: Vec<f64>,
    pub(crate) predecessors: Vec<Option<Predecessor>>,
    pub(crate) settled: FixedBitSet,
}

impl SearchState {
    pub(crate) fn new(num_nodes: usize, start: NodeIndex) -> Self {
        let mut g_costs = vec![f64::INFINITY; num_nodes];
        g_costs[start.index()] = 0.0;
        SearchState {
            g_costs,
            predecessors: vec![None; num_nodes],
            settled: FixedBitSet::with_capacity(num_nodes),
        }
    }

    pub(crate) fn g_cost(&self, node: NodeIndex) -> f64 {
        self.g_costs[node.index()]
    }

    pub(crate) fn predecessor(&self, node: NodeIndex) -> Option<Predecessor> {
        self.predecessors[node.index()]
    }

    /// Records a better label; returns false if `cost` does not improve it
    pub(crate) fn relax(&mut self, node: NodeIndex, cost: f64, via: Predecessor) -> bool {
        if cost < self.g_costs[node.index()] {
            self.g_costs[node.index()] = cost;
            self.predecessors[node.index()] = Some(via);
            true
        } else {
            false
        }
    }

    pub(crate) fn settled_count(&self) -> usize {
        self.settled.count_ones(..)
    }
}
