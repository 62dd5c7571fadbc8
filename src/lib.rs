//! Terrain generation and autotiling library
//!
//! Generates a 2D terrain grid from seeded noise, cleans it up with a
//! cellular-automaton pass and a shoreline pass, and resolves a concrete
//! sprite for every cell from its neighbors. Also provides manual tile
//! overrides and A* pathfinding over the generated terrain.

pub mod ascii;
pub mod autotile;
pub mod coastline;
pub mod config;
pub mod error;
pub mod export;
pub mod noise_field;
pub mod overlay;
pub mod pathfinding;
pub mod seeds;
pub mod session;
pub mod smoothing;
pub mod terrain;
pub mod tilemap;

pub use autotile::{resolve, AutotileResolver, SpritePosition, TileRule, TileRules};
pub use config::{NoiseConfig, SmoothingRules};
pub use error::TerrainError;
pub use overlay::{resolve_tile, OverlayChange, OverrideOverlay};
pub use pathfinding::{find_path, Position};
pub use session::{generate, MapSession};
pub use terrain::{TerrainGrid, TerrainType};
