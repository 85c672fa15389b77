//! Route engine: weighting, normalization, label-setting search and path
//! reconstruction.

mod dijkstra;
mod engine;
mod normalization;
mod path;
mod weights;

pub use engine::{RouteEngine, RouteQuery, find_optimal_path};
pub use normalization::{CostModel, NormalizationBounds};
pub use path::{PathNode, RoutePath, RouteTotals};
pub use weights::Weights;
