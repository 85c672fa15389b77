use serde::Serialize;

use crate::{Error, WEIGHT_SUM_TOLERANCE};

/// User priorities for time, distance and monetary cost.
///
/// Components are non-negative and sum to 1.0 within
/// [`WEIGHT_SUM_TOLERANCE`]; the only way to build a value is
/// [`Weights::new`], so a `Weights` handed to the engine is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    time: f64,
    distance: f64,
    cost: f64,
}

impl Weights {
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeights`] if a component is negative or not
    /// finite, or if the sum is further than the tolerance from 1.0.
    pub fn new(time: f64, distance: f64, cost: f64) -> Result<Self, Error> {
        let components_valid = [time, distance, cost]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0);
        let sum = time + distance + cost;

        if !components_valid || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::InvalidWeights {
                time,
                distance,
                cost,
            });
        }

        Ok(Self {
            time,
            distance,
            cost,
        })
    }

    /// Weights that only care about travel time
    pub fn fastest() -> Self {
        Self {
            time: 1.0,
            distance: 0.0,
            cost: 0.0,
        }
    }

    /// Weights that only care about distance
    pub fn shortest() -> Self {
        Self {
            time: 0.0,
            distance: 1.0,
            cost: 0.0,
        }
    }

    /// Weights that only care about tolls and fuel
    pub fn cheapest() -> Self {
        Self {
            time: 0.0,
            distance: 0.0,
            cost: 1.0,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}
