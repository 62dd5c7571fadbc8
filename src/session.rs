//! Map generation pipeline and the per-session map state
//!
//! `generate` runs classify -> smooth -> coast once. A `MapSession` then owns
//! the terrain grid and its override overlay for the rest of the game session.
//! Sprites are never stored: every query re-resolves from the grid.

use std::time::Instant;

use crate::autotile::{AutotileResolver, SpritePosition};
use crate::coastline::apply_coast;
use crate::config::{NoiseConfig, SmoothingRules};
use crate::error::TerrainError;
use crate::overlay::{resolve_tile_with, OverlayChange, OverrideOverlay};
use crate::pathfinding::{self, Position};
use crate::smoothing::smooth_with;
use crate::terrain::{TerrainClassifier, TerrainGrid, TerrainType};

/// Generate a terrain grid with default smoothing rules, plus an empty overlay.
pub fn generate(
    width: usize,
    height: usize,
    config: &NoiseConfig,
) -> Result<(TerrainGrid, OverrideOverlay), TerrainError> {
    generate_with(width, height, config, &SmoothingRules::default())
}

pub fn generate_with(
    width: usize,
    height: usize,
    config: &NoiseConfig,
    rules: &SmoothingRules,
) -> Result<(TerrainGrid, OverrideOverlay), TerrainError> {
    config.validate()?;
    rules.validate()?;

    log::debug!("generating {}x{} terrain with {}", width, height, config.seeds());

    let start = Instant::now();
    let raw = TerrainClassifier::new(config).classify_grid(width, height)?;
    log::debug!("classified in {:?}", start.elapsed());

    let start = Instant::now();
    let smoothed = smooth_with(&raw, config.smoothing_iterations, rules);
    log::debug!(
        "smoothed ({} rounds) in {:?}",
        config.smoothing_iterations,
        start.elapsed()
    );

    let grid = apply_coast(&smoothed);
    log::debug!("terrain counts: {:?}", terrain_counts(&grid));

    let overlay = OverrideOverlay::for_grid(&grid);
    Ok((grid, overlay))
}

/// Cells of each terrain, indexed by `TerrainType::index`.
pub fn terrain_counts(grid: &TerrainGrid) -> [usize; TerrainType::COUNT] {
    let mut counts = [0usize; TerrainType::COUNT];
    for (_, _, t) in grid.iter() {
        counts[t.index()] += 1;
    }
    counts
}

/// The terrain grid and override layer of one game session.
pub struct MapSession {
    grid: TerrainGrid,
    overlay: OverrideOverlay,
    resolver: &'static AutotileResolver,
}

impl MapSession {
    /// Run the generation pipeline and start a session on the result.
    pub fn generate(width: usize, height: usize, config: &NoiseConfig) -> Result<Self, TerrainError> {
        let (grid, overlay) = generate(width, height, config)?;
        Ok(Self {
            grid,
            overlay,
            resolver: AutotileResolver::standard(),
        })
    }

    /// Start a session on a pre-built grid, bypassing generation.
    pub fn from_grid(grid: TerrainGrid) -> Self {
        let overlay = OverrideOverlay::for_grid(&grid);
        Self {
            grid,
            overlay,
            resolver: AutotileResolver::standard(),
        }
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    pub fn overlay(&self) -> &OverrideOverlay {
        &self.overlay
    }

    pub fn resolve_tile(&self, x: usize, y: usize) -> Result<SpritePosition, TerrainError> {
        resolve_tile_with(self.resolver, &self.grid, &self.overlay, x, y)
    }

    /// Set or clear an override. Listeners run before this returns.
    pub fn paint(
        &mut self,
        x: usize,
        y: usize,
        sprite: Option<SpritePosition>,
    ) -> Result<OverlayChange, TerrainError> {
        self.overlay.paint(x, y, sprite)
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&OverlayChange) + Send + 'static,
    {
        self.overlay.subscribe(listener);
    }

    /// Change one cell's terrain and return the re-resolved sprites of the
    /// cell and its in-bounds neighbors, row-major. No other cell's autotile
    /// result can change.
    pub fn set_terrain(
        &mut self,
        x: usize,
        y: usize,
        terrain: TerrainType,
    ) -> Result<Vec<(Position, SpritePosition)>, TerrainError> {
        self.grid.check(x, y)?;
        self.grid.set(x, y, terrain);

        let mut cells = self.grid.neighbors_8(x, y);
        cells.push((x, y));
        cells.sort_by_key(|&(cx, cy)| (cy, cx));

        cells
            .into_iter()
            .map(|(cx, cy)| self.resolve_tile(cx, cy).map(|sprite| ((cx, cy), sprite)))
            .collect()
    }

    /// Replace the whole grid with a fresh generation. Overrides are cleared
    /// (with notifications) since they refer to the old map.
    pub fn regenerate(&mut self, config: &NoiseConfig) -> Result<(), TerrainError> {
        let (grid, _) = generate(self.grid.width, self.grid.height, config)?;
        self.overlay.clear_all();
        self.grid = grid;
        Ok(())
    }

    pub fn find_path(&self, start: Position, goal: Position) -> Result<Vec<Position>, TerrainError> {
        pathfinding::find_path(&self.grid, start, goal)
    }
}
