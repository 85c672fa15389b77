use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::dijkstra::label_setting_search;
use super::normalization::{CostModel, NormalizationBounds};
use super::path::{RoutePath, reconstruct_path};
use super::weights::Weights;
use crate::{Error, NodeId, RoadEdge, RoadGraph};

/// One routing request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteQuery {
    pub start: NodeId,
    pub end: NodeId,
    #[serde(with = "weights_serde")]
    pub weights: Weights,
}

/// Route engine bound to one read-only graph.
///
/// Normalization bounds are computed once on construction and shared by
/// every query, so the same edge always gets the same normalized components.
#[derive(Debug, Clone)]
pub struct RouteEngine<'a> {
    graph: &'a RoadGraph,
    cost_model: CostModel,
    bounds: NormalizationBounds,
}

impl<'a> RouteEngine<'a> {
    pub fn new(graph: &'a RoadGraph) -> Self {
        Self::with_cost_model(graph, CostModel::default())
    }

    pub fn with_cost_model(graph: &'a RoadGraph, cost_model: CostModel) -> Self {
        let bounds = NormalizationBounds::from_graph(graph, &cost_model);
        debug!(
            "Normalization bounds: time={:.3} min, distance={:.3} km, cost={:.3}",
            bounds.max_time, bounds.max_distance, bounds.max_cost
        );
        Self {
            graph,
            cost_model,
            bounds,
        }
    }

    pub fn graph(&self) -> &RoadGraph {
        self.graph
    }

    pub fn bounds(&self) -> &NormalizationBounds {
        &self.bounds
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// Unified score of a single edge under `weights`
    pub fn edge_score(&self, edge: &RoadEdge, weights: &Weights) -> f64 {
        self.bounds.unified_score(edge, weights, &self.cost_model)
    }

    /// Finds the route with the lowest accumulated unified score.
    ///
    /// Returns `Ok(None)` when `end` cannot be reached from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `start` or `end` is not in the graph.
    pub fn find_optimal_path(
        &self,
        start: NodeId,
        end: NodeId,
        weights: &Weights,
    ) -> Result<Option<RoutePath>, Error> {
        let start_idx = self.graph.node_index(start)?;
        let end_idx = self.graph.node_index(end)?;

        debug!(
            "Routing {start} -> {end} (time={}, distance={}, cost={})",
            weights.time(),
            weights.distance(),
            weights.cost()
        );

        // Scored once per query, indexed by edge index
        let edge_scores: Vec<f64> = self
            .graph
            .edges()
            .map(|edge| self.edge_score(edge, weights))
            .collect();

        let state = label_setting_search(self.graph, &edge_scores, start_idx, end_idx);
        let path = reconstruct_path(self.graph, &state, &self.cost_model, start_idx, end_idx);

        match &path {
            Some(path) => debug!(
                "Found route {start} -> {end} with {} hops, score {:.6}, {} nodes settled",
                path.hops(),
                path.score,
                state.settled_count()
            ),
            None => debug!(
                "No route {start} -> {end}, {} nodes settled",
                state.settled_count()
            ),
        }

        Ok(path)
    }

    /// Runs independent queries in parallel. Results keep the query order.
    pub fn find_optimal_paths(&self, queries: &[RouteQuery]) -> Vec<Result<Option<RoutePath>, Error>> {
        queries
            .par_iter()
            .map(|query| self.find_optimal_path(query.start, query.end, &query.weights))
            .collect()
    }
}

/// One-shot query with the default cost model.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `start` or `end` is not in the graph.
pub fn find_optimal_path(
    graph: &RoadGraph,
    start: NodeId,
    end: NodeId,
    weights: &Weights,
) -> Result<Option<RoutePath>, Error> {
    RouteEngine::new(graph).find_optimal_path(start, end, weights)
}

/// Weights travel as `{ time, distance, cost }` and are validated on the way in
mod weights_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::Weights;

    #[derive(Serialize, Deserialize)]
    struct RawWeights {
        time: f64,
        distance: f64,
        cost: f64,
    }

    pub(super) fn serialize<S: Serializer>(weights: &Weights, serializer: S) -> Result<S::Ok, S::Error> {
        RawWeights {
            time: weights.time(),
            distance: weights.distance(),
            cost: weights.cost(),
        }
        .serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weights, D::Error> {
        let raw = RawWeights::deserialize(deserializer)?;
        Weights::new(raw.time, raw.distance, raw.cost).map_err(serde::de::Error::custom)
    }
}
