//! Terrain types and noise-driven classification

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::NoiseConfig;
use crate::error::TerrainError;
use crate::noise_field::NoiseField;
use crate::tilemap::Tilemap;

/// Ground cover of a single cell. Declaration order is the tie-break order
/// used by smoothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TerrainType {
    #[default]
    Grass,
    Water,
    Dirt,
}

impl TerrainType {
    pub const ALL: [TerrainType; 3] = [TerrainType::Grass, TerrainType::Water, TerrainType::Dirt];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in declaration order.
    pub fn index(self) -> usize {
        match self {
            TerrainType::Grass => 0,
            TerrainType::Water => 1,
            TerrainType::Dirt => 2,
        }
    }

    /// Default walkability policy: everything except water.
    pub fn is_walkable(self) -> bool {
        self != TerrainType::Water
    }

    pub fn name(&self) -> &'static str {
        match self {
            TerrainType::Grass => "Grass",
            TerrainType::Water => "Water",
            TerrainType::Dirt => "Dirt",
        }
    }
}

impl std::fmt::Display for TerrainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub type TerrainGrid = Tilemap<TerrainType>;

/// Frequency of the dirt field.
const DIRT_SCALE: f64 = 0.15;
/// Coordinate offset of the dirt field, keeps it away from the water field's origin.
const DIRT_OFFSET: f64 = 500.0;

/// Classifies cells from two independent noise fields.
#[derive(Clone, Debug)]
pub struct TerrainClassifier {
    water: NoiseField,
    dirt: NoiseField,
    water_scale: f64,
    water_threshold: f64,
    dirt_threshold: f64,
}

impl TerrainClassifier {
    pub fn new(config: &NoiseConfig) -> Self {
        let seeds = config.seeds();
        Self {
            water: NoiseField::new(seeds.water),
            dirt: NoiseField::new(seeds.dirt),
            water_scale: config.water_scale,
            water_threshold: config.water_threshold,
            dirt_threshold: config.dirt_threshold,
        }
    }

    pub fn classify(&self, x: f64, y: f64) -> TerrainType {
        let water_noise = self.water.sample(x * self.water_scale, y * self.water_scale);
        if water_noise < self.water_threshold {
            return TerrainType::Water;
        }

        let dirt_noise = self
            .dirt
            .sample(x * DIRT_SCALE + DIRT_OFFSET, y * DIRT_SCALE + DIRT_OFFSET);
        if dirt_noise < self.dirt_threshold {
            return TerrainType::Dirt;
        }

        TerrainType::Grass
    }

    /// Classify every cell of a `width` x `height` grid. Rows run in parallel.
    pub fn classify_grid(&self, width: usize, height: usize) -> Result<TerrainGrid, TerrainError> {
        let mut grid = TerrainGrid::new(width, height)?;
        grid.par_rows_mut().for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.classify(x as f64, y as f64);
            }
        });
        Ok(grid)
    }
}

/// One-shot classification of a single cell.
pub fn classify(x: f64, y: f64, config: &NoiseConfig) -> TerrainType {
    TerrainClassifier::new(config).classify(x, y)
}
