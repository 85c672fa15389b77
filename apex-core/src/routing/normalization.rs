//! Global normalization of heterogeneous edge costs.
//!
//! Travel time, distance and money are divided by their maximum over the
//! whole graph, which maps each of them into `[0, 1]` independently of
//! search progress.

use serde::{Deserialize, Serialize};

use crate::{Error, FUEL_PRICE_PER_KM, RoadEdge, RoadGraph, Weights};

/// Parameters turning raw edge attributes into money.
///
/// The fuel price is finite and non-negative, which keeps every monetary
/// cost and therefore every edge score non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCostModel")]
pub struct CostModel {
    fuel_price_per_km: f64,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCostModel {
    fuel_price_per_km: f64,
}

impl Default for RawCostModel {
    fn default() -> Self {
        Self {
            fuel_price_per_km: FUEL_PRICE_PER_KM,
        }
    }
}

impl TryFrom<RawCostModel> for CostModel {
    type Error = Error;

    fn try_from(raw: RawCostModel) -> Result<Self, Self::Error> {
        CostModel::new(raw.fuel_price_per_km)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            fuel_price_per_km: FUEL_PRICE_PER_KM,
        }
    }
}

impl CostModel {
    /// # Errors
    ///
    /// Returns [`Error::InvalidFuelPrice`] if the price is negative or not
    /// finite.
    pub fn new(fuel_price_per_km: f64) -> Result<Self, Error> {
        if fuel_price_per_km.is_finite() && fuel_price_per_km >= 0.0 {
            Ok(Self { fuel_price_per_km })
        } else {
            Err(Error::InvalidFuelPrice(fuel_price_per_km))
        }
    }

    pub fn fuel_price_per_km(&self) -> f64 {
        self.fuel_price_per_km
    }

    pub fn monetary_cost(&self, edge: &RoadEdge) -> f64 {
        edge.monetary_cost(self.fuel_price_per_km)
    }
}

/// Maxima of the three cost dimensions over every edge of a graph
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NormalizationBounds {
    /// Minutes
    pub max_time: f64,
    /// Kilometres
    pub max_distance: f64,
    /// Currency units
    pub max_cost: f64,
}

impl NormalizationBounds {
    /// Scans every directed edge once. An empty graph yields all-zero bounds.
    pub fn from_graph(graph: &RoadGraph, cost_model: &CostModel) -> Self {
        graph
            .edges()
            .fold(NormalizationBounds::default(), |bounds, edge| {
                NormalizationBounds {
                    max_time: bounds.max_time.max(edge.travel_time()),
                    max_distance: bounds.max_distance.max(edge.distance),
                    max_cost: bounds.max_cost.max(cost_model.monetary_cost(edge)),
                }
            })
    }

    /// Weighted sum of the normalized time, distance and cost of `edge`.
    /// A dimension whose bound is zero contributes nothing.
    pub fn unified_score(&self, edge: &RoadEdge, weights: &Weights, cost_model: &CostModel) -> f64 {
        let norm_time = ratio(edge.travel_time(), self.max_time);
        let norm_dist = ratio(edge.distance, self.max_distance);
        let norm_cost = ratio(cost_model.monetary_cost(edge), self.max_cost);

        norm_time * weights.time() + norm_dist * weights.distance() + norm_cost * weights.cost()
    }
}

fn ratio(value: f64, max: f64) -> f64 {
    if max > 0.0 { value / max } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> RoadGraph {
        let mut graph = RoadGraph::new();
        graph.add_node(1, "A");
        graph.add_node(2, "B");
        graph.add_node(3, "C");
        // 12 min, 10 km, 15.0 money
        graph.add_edge(1, 2, 10.0, 50.0, 1.0, 0.0).unwrap();
        // 12 min, 4 km, 16.0 money
        graph.add_edge(2, 3, 4.0, 40.0, 2.0, 10.0).unwrap();
        graph
    }

    #[test]
    fn bounds_are_global_maxima() {
        let bounds = NormalizationBounds::from_graph(&sample_graph(), &CostModel::default());
        assert!((bounds.max_time - 12.0).abs() < 1e-9);
        assert!((bounds.max_distance - 10.0).abs() < 1e-9);
        assert!((bounds.max_cost - 16.0).abs() < 1e-9);
    }

    #[test]
    fn empty_graph_has_zero_bounds() {
        let bounds = NormalizationBounds::from_graph(&RoadGraph::new(), &CostModel::default());
        assert_eq!(bounds, NormalizationBounds::default());
    }

    #[test]
    fn fuel_price_changes_cost_bound() {
        let free_fuel = CostModel::new(0.0).unwrap();
        let bounds = NormalizationBounds::from_graph(&sample_graph(), &free_fuel);
        assert!((bounds.max_cost - 10.0).abs() < 1e-9);
    }

    #[test]
    fn fuel_price_must_be_finite_and_non_negative() {
        assert!(CostModel::new(0.0).is_ok());
        assert_eq!(CostModel::new(2.5).unwrap().fuel_price_per_km(), 2.5);
        assert!(matches!(CostModel::new(-1.0), Err(Error::InvalidFuelPrice(_))));
        assert!(CostModel::new(f64::NAN).is_err());
        assert!(CostModel::new(f64::INFINITY).is_err());
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let model: CostModel = serde_json::from_str(r#"{"fuel_price_per_km": 1.8}"#).unwrap();
        assert_eq!(model.fuel_price_per_km(), 1.8);

        let model: CostModel = serde_json::from_str("{}").unwrap();
        assert_eq!(model, CostModel::default());

        assert!(serde_json::from_str::<CostModel>(r#"{"fuel_price_per_km": -0.5}"#).is_err());
    }

    #[test]
    fn unified_score_blends_normalized_components() {
        let graph = sample_graph();
        let cost_model = CostModel::default();
        let bounds = NormalizationBounds::from_graph(&graph, &cost_model);
        let edge = graph.edges_from(2)[1];
        assert_eq!(edge.to, 3);

        let weights = Weights::new(0.5, 0.25, 0.25).unwrap();
        let expected = 0.5 * 1.0 + 0.25 * 0.4 + 0.25 * 1.0;
        let score = bounds.unified_score(edge, &weights, &cost_model);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_bound_dimension_contributes_nothing() {
        let graph = sample_graph();
        let bounds = NormalizationBounds {
            max_cost: 0.0,
            ..NormalizationBounds::from_graph(&graph, &CostModel::default())
        };
        let edge = graph.edges_from(1)[0];
        let score = bounds.unified_score(edge, &Weights::cheapest(), &CostModel::default());
        assert_eq!(score, 0.0);
    }
}
