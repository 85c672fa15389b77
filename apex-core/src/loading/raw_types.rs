use serde::Deserialize;

use crate::NodeId;

#[derive(Debug, Clone, Deserialize)]
pub struct MapNode {
    pub id: NodeId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
    pub speed_limit: f64,
    #[serde(alias = "traffic_multiplier")]
    pub traffic: f64,
    #[serde(default)]
    pub toll: f64,
}

/// Whole map file: `{ "nodes": [...], "edges": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct MapFile {
    pub nodes: Vec<MapNode>,
    #[serde(default)]
    pub edges: Vec<MapEdge>,
}
