use serde::{Deserialize, Serialize};

use super::error::CollisionError;

/// Overlap padding added by the circle resolvers
pub const DEFAULT_PADDING: f32 = 0.3;
/// Width of the band that separates corner regions from edge-middle regions
pub const DEFAULT_CORNER_TOLERANCE: f32 = 1.0;

/// Tunables shared by every resolver
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Extra separation so resolved circles do not re-trigger on the boundary
    pub padding: f32,
    pub corner_tolerance: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            corner_tolerance: DEFAULT_CORNER_TOLERANCE,
        }
    }
}

impl CollisionConfig {
    pub fn from_json(json: &str) -> Result<Self, CollisionError> {
        let config: CollisionConfig =
            serde_json::from_str(json).map_err(|e| CollisionError::Config(e.to_string()))?;
        if !config.padding.is_finite() || config.padding < 0.0 {
            return Err(CollisionError::Config(format!("invalid padding {}", config.padding)));
        }
        if !config.corner_tolerance.is_finite() || config.corner_tolerance < 0.0 {
            return Err(CollisionError::Config(format!(
                "invalid corner_tolerance {}",
                config.corner_tolerance
            )));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
