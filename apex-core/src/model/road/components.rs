//! Road network components - nodes and edges

use serde::Serialize;

use crate::NodeId;

/// Road graph node (a named location)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadNode {
    pub id: NodeId,
    pub name: String,
}

/// Directed road edge. The source is implicit: it is the node whose
/// adjacency list holds the edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadEdge {
    /// Target node
    pub to: NodeId,
    /// Length of the segment in km
    pub distance: f64,
    /// Speed limit in km/h
    pub speed_limit: f64,
    /// Congestion factor, inflates travel time
    pub traffic_multiplier: f64,
    /// Toll in currency units
    pub toll: f64,
}

impl RoadEdge {
    /// Travel time in minutes under current traffic
    pub fn travel_time(&self) -> f64 {
        (self.distance / self.speed_limit) * self.traffic_multiplier * 60.0
    }

    /// Toll plus fuel spent over the segment
    pub fn monetary_cost(&self, fuel_price_per_km: f64) -> f64 {
        self.toll + self.distance * fuel_price_per_km
    }

    pub(crate) fn validate(&self, from: NodeId) -> Result<(), crate::Error> {
        let reason = if !(self.distance.is_finite() && self.distance > 0.0) {
            Some(format!("distance must be positive, got {}", self.distance))
        } else if !(self.speed_limit.is_finite() && self.speed_limit > 0.0) {
            Some(format!("speed limit must be positive, got {}", self.speed_limit))
        } else if !(self.traffic_multiplier.is_finite() && self.traffic_multiplier >= 1.0) {
            Some(format!(
                "traffic multiplier must be at least 1.0, got {}",
                self.traffic_multiplier
            ))
        } else if !(self.toll.is_finite() && self.toll >= 0.0) {
            Some(format!("toll must be non-negative, got {}", self.toll))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(crate::Error::InvalidEdge {
                from,
                to: self.to,
                reason,
            }),
            None => Ok(()),
        }
    }
}
