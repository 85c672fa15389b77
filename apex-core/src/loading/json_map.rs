use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::builder::build_road_graph;
use super::raw_types::MapFile;
use crate::{Error, RoadGraph};

/// Reads a JSON map file from disk
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not valid JSON, or
/// describes an invalid network.
pub fn load_json_map(path: impl AsRef<Path>) -> Result<RoadGraph, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open map file '{}': {}", path.display(), e),
        )
    })?;
    road_graph_from_json(BufReader::new(file))
}

/// Builds a graph from any JSON source
///
/// # Errors
///
/// Returns an error if the input is not a valid map document or describes
/// an invalid network.
pub fn road_graph_from_json<R: Read>(reader: R) -> Result<RoadGraph, Error> {
    let map: MapFile = serde_json::from_reader(reader)?;
    build_road_graph(map.nodes, map.edges)
}
