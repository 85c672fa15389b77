//! Data model for road network routing
//!
//! Contains the node and edge types and the graph that owns them.

pub mod road;

pub use road::{RoadEdge, RoadGraph, RoadNode};
