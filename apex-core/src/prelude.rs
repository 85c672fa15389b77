pub use crate::{FUEL_PRICE_PER_KM, NodeId, WEIGHT_SUM_TOLERANCE};

pub use crate::error::Error;

// Graph model and loaders
pub use crate::loading::{load_csv_map, load_json_map, road_graph_from_json};
pub use crate::model::{RoadEdge, RoadGraph, RoadNode};

// Route engine
pub use crate::routing::{
    CostModel, NormalizationBounds, PathNode, RouteEngine, RoutePath, RouteQuery, RouteTotals,
    Weights, find_optimal_path,
};
