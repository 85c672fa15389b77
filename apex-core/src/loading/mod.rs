//! This module is responsible for reading road network descriptions
//! (JSON map files or CSV node/edge tables) and building a [`RoadGraph`].
//!
//! [`RoadGraph`]: crate::RoadGraph

mod builder;
mod csv_map;
mod json_map;
mod raw_types;

pub use csv_map::load_csv_map;
pub use json_map::{load_json_map, road_graph_from_json};
pub use raw_types::{MapEdge, MapFile, MapNode};
