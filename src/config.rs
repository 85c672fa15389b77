//! Optional TOML configuration for the command line frontend.
//!
//! ```toml
//! map = "maps/city.json"
//!
//! [weights]
//! time = 0.7
//! distance = 0.1
//! cost = 0.2
//!
//! [cost]
//! fuel_price_per_km = 1.8
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use apex_core::CostModel;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON map file
    pub map: Option<PathBuf>,
    pub weights: WeightsConfig,
    pub cost: CostModel,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightsConfig {
    pub time: Option<f64>,
    pub distance: Option<f64>,
    pub cost: Option<f64>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config file '{}'", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = Config::parse(
            r#"
            map = "city.json"

            [weights]
            time = 0.7
            distance = 0.1
            cost = 0.2

            [cost]
            fuel_price_per_km = 1.8
            "#,
        )
        .unwrap();

        assert_eq!(config.map, Some(PathBuf::from("city.json")));
        assert_eq!(config.weights.time, Some(0.7));
        assert_eq!(config.weights.distance, Some(0.1));
        assert_eq!(config.weights.cost, Some(0.2));
        assert_eq!(config.cost.fuel_price_per_km(), 1.8);
    }

    #[test]
    fn everything_is_optional() {
        let config = Config::parse("").unwrap();
        assert!(config.map.is_none());
        assert!(config.weights.time.is_none());
        assert_eq!(config.cost, CostModel::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("mapp = \"typo.json\"").is_err());
        assert!(Config::parse("[weights]\nspeed = 1.0").is_err());
    }

    #[test]
    fn negative_fuel_price_is_rejected() {
        let err = Config::parse("[cost]\nfuel_price_per_km = -1.0").unwrap_err();
        assert!(err.to_string().contains("non-negative"), "{err}");
    }
}
