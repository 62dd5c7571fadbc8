//! Seed management for terrain generation
//!
//! The classifier samples two noise fields. Each gets its own seed, derived
//! from the master seed so the two fields stay decorrelated.

/// Offset added to the master seed for the dirt field.
pub const DIRT_SEED_OFFSET: u64 = 1000;

/// Seeds for the noise fields used by the terrain classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerrainSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Water/land noise field
    pub water: u64,
    /// Dirt patch noise field
    pub dirt: u64,
}

impl TerrainSeeds {
    /// Derive both field seeds from a master seed.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            water: master,
            dirt: master.wrapping_add(DIRT_SEED_OFFSET),
        }
    }

    /// Create a builder for customizing individual seeds
    pub fn builder(master: u64) -> TerrainSeedsBuilder {
        TerrainSeedsBuilder::new(master)
    }
}

/// Builder for overriding one field seed while deriving the other from master
pub struct TerrainSeedsBuilder {
    seeds: TerrainSeeds,
}

impl TerrainSeedsBuilder {
    pub fn new(master: u64) -> Self {
        Self {
            seeds: TerrainSeeds::from_master(master),
        }
    }

    /// Override the water seed
    pub fn water(mut self, seed: u64) -> Self {
        self.seeds.water = seed;
        self
    }

    /// Override the dirt seed
    pub fn dirt(mut self, seed: u64) -> Self {
        self.seeds.dirt = seed;
        self
    }

    pub fn build(self) -> TerrainSeeds {
        self.seeds
    }
}

impl std::fmt::Display for TerrainSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TerrainSeeds {{ master: {}, water: {}, dirt: {} }}",
            self.master, self.water, self.dirt,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_derivation() {
        assert_eq!(TerrainSeeds::from_master(12345), TerrainSeeds::from_master(12345));
    }

    #[test]
    fn test_dirt_seed_is_offset() {
        let seeds = TerrainSeeds::from_master(42);
        assert_eq!(seeds.water, 42);
        assert_eq!(seeds.dirt, 1042);
    }

    #[test]
    fn test_offset_wraps_at_max() {
        let seeds = TerrainSeeds::from_master(u64::MAX);
        assert_eq!(seeds.dirt, DIRT_SEED_OFFSET - 1);
    }

    #[test]
    fn test_builder_override() {
        let seeds = TerrainSeeds::builder(12345).dirt(99999).build();
        assert_eq!(seeds.dirt, 99999);
        assert_eq!(seeds.water, 12345);
    }
}
