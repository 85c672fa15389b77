use std::fs::File;
use std::path::Path;

use super::builder::build_road_graph;
use super::raw_types::{MapEdge, MapNode};
use crate::{Error, RoadGraph};

/// Reads a network from a node table (`id,name`) and an edge table
/// (`from,to,distance,speed_limit,traffic,toll`)
///
/// # Errors
///
/// Returns an error if either file cannot be read, a row fails to parse, or
/// the network is invalid.
pub fn load_csv_map(
    nodes_path: impl AsRef<Path>,
    edges_path: impl AsRef<Path>,
) -> Result<RoadGraph, Error> {
    let nodes: Vec<MapNode> = deserialize_csv_file(nodes_path.as_ref())?;
    let edges: Vec<MapEdge> = deserialize_csv_file(edges_path.as_ref())?;
    build_road_graph(nodes, edges)
}

fn deserialize_csv_file<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;

    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(Error::from)
}
