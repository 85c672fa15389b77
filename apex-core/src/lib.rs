//! Multi-criteria routing over a weighted road network.
//!
//! The crate is split into a graph model ([`RoadGraph`]), loaders for map
//! files, and a route engine that blends travel time, distance and monetary
//! cost into a single normalized score before running a label-setting search.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{load_csv_map, load_json_map, road_graph_from_json};
pub use model::{RoadEdge, RoadGraph, RoadNode};
pub use routing::{
    CostModel, NormalizationBounds, PathNode, RouteEngine, RoutePath, RouteQuery, RouteTotals,
    Weights, find_optimal_path,
};

/// Identifier of a node in the road network
pub type NodeId = i64;

/// Fuel spent per driven kilometre, in currency units
pub const FUEL_PRICE_PER_KM: f64 = 1.5;

/// Allowed deviation of the weight sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;
