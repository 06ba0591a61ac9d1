// Runtime configuration for the navigator

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithms::SearchStrategy;
use crate::error::NavigatorError;

/// Map units per displayed metre
pub const DEFAULT_DISTANCE_SCALE: f64 = 10.0;

/// Margin around a floor's rooms in the drawing viewport
pub const DEFAULT_PLAN_PADDING: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Frontier implementation used by the route search
    pub strategy: SearchStrategy,

    /// Divisor turning map units into displayed metres
    pub distance_scale: f64,

    /// Padding added around each floor plan
    pub plan_padding: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            distance_scale: DEFAULT_DISTANCE_SCALE,
            plan_padding: DEFAULT_PLAN_PADDING,
        }
    }
}

impl NavigatorConfig {
    pub fn from_json(json: &str) -> Result<Self, NavigatorError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Reads a configuration file; missing fields fall back to defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<NavigatorConfig, NavigatorError> {
    let json = fs::read_to_string(path.as_ref())?;
    let config = NavigatorConfig::from_json(&json)?;
    log::info!(
        "Loaded configuration from {} ({:?} search)",
        path.as_ref().display(),
        config.strategy
    );
    Ok(config)
}
