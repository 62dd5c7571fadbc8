//! Generation parameters
//!
//! Values are validated once, when a map is generated or a config file is
//! loaded. Out-of-range values are rejected, never clamped.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;
use crate::seeds::TerrainSeeds;

/// Noise parameters for the terrain classifier and smoother.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Master seed; the dirt field uses `seed + 1000`
    pub seed: u64,
    /// Water where the water noise falls below this, in `[0, 1)`
    pub water_threshold: f64,
    /// Frequency multiplier for the water field (> 0)
    pub water_scale: f64,
    /// Dirt where the dirt noise falls below this, in `[0, 1)`
    pub dirt_threshold: f64,
    /// Number of smoothing rounds applied after classification
    pub smoothing_iterations: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            water_threshold: 0.3,
            water_scale: 0.1,
            dirt_threshold: 0.15,
            smoothing_iterations: 2,
        }
    }
}

impl NoiseConfig {
    pub fn seeds(&self) -> TerrainSeeds {
        TerrainSeeds::from_master(self.seed)
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        check_threshold("water_threshold", self.water_threshold)?;
        check_threshold("dirt_threshold", self.dirt_threshold)?;
        if !self.water_scale.is_finite() || self.water_scale <= 0.0 {
            return Err(TerrainError::InvalidConfig(format!(
                "water_scale must be a positive number, got {}",
                self.water_scale
            )));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TerrainError> {
        let contents = fs::read_to_string(path)?;
        let config: NoiseConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), TerrainError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn check_threshold(name: &str, value: f64) -> Result<(), TerrainError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(TerrainError::InvalidConfig(format!(
            "{} must be in [0, 1), got {}",
            name, value
        )))
    }
}

/// Neighbor counts a smoothing round needs before it rewrites a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingRules {
    /// Required count when the current cell is water
    pub water_threshold: u8,
    /// Required count for every other terrain
    pub default_threshold: u8,
}

impl Default for SmoothingRules {
    fn default() -> Self {
        Self {
            water_threshold: 6,
            default_threshold: 5,
        }
    }
}

impl SmoothingRules {
    pub fn validate(&self) -> Result<(), TerrainError> {
        for (name, value) in [
            ("water_threshold", self.water_threshold),
            ("default_threshold", self.default_threshold),
        ] {
            if value > 8 {
                return Err(TerrainError::InvalidConfig(format!(
                    "smoothing {} must be at most 8 neighbors, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
