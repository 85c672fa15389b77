use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Weights must sum to 1.0 (got time={time}, distance={distance}, cost={cost})")]
    InvalidWeights { time: f64, distance: f64, cost: f64 },
    #[error("Fuel price must be finite and non-negative, got {0}")]
    InvalidFuelPrice(f64),
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
    #[error("Invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: NodeId,
        to: NodeId,
        reason: String,
    },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
