//! File exports: PNG previews of a terrain grid and a JSON dump of the
//! resolved sprite for every cell.

use std::fs;
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use serde::Serialize;

use crate::ascii::terrain_color;
use crate::autotile::SpritePosition;
use crate::error::TerrainError;
use crate::overlay::{resolve_tile, OverrideOverlay};
use crate::pathfinding::Position;
use crate::terrain::TerrainGrid;

const PATH_COLOR: [u8; 3] = [230, 40, 40];

/// Render the grid with `scale` x `scale` pixels per cell.
pub fn render_terrain_image(grid: &TerrainGrid, scale: u32, path: &[Position]) -> RgbImage {
    let scale = scale.max(1);
    let mut img: RgbImage = ImageBuffer::new(grid.width as u32 * scale, grid.height as u32 * scale);

    for (x, y, &terrain) in grid.iter() {
        let (r, g, b) = terrain_color(terrain);
        fill_cell(&mut img, x, y, scale, [r, g, b]);
    }
    for &(x, y) in path {
        if grid.in_bounds(x, y) {
            fill_cell(&mut img, x, y, scale, PATH_COLOR);
        }
    }

    img
}

fn fill_cell(img: &mut RgbImage, x: usize, y: usize, scale: u32, color: [u8; 3]) {
    let px = x as u32 * scale;
    let py = y as u32 * scale;
    for dy in 0..scale {
        for dx in 0..scale {
            img.put_pixel(px + dx, py + dy, Rgb(color));
        }
    }
}

/// Export a terrain map as a PNG.
pub fn export_terrain_map(
    grid: &TerrainGrid,
    scale: u32,
    path_cells: &[Position],
    path: impl AsRef<Path>,
) -> Result<(), TerrainError> {
    render_terrain_image(grid, scale, path_cells).save(path)?;
    Ok(())
}

#[derive(Serialize)]
struct TileDump {
    width: usize,
    height: usize,
    /// `tiles[y][x]`
    tiles: Vec<Vec<SpritePosition>>,
}

/// Export the resolved sprite of every cell (overrides included) as JSON.
pub fn export_tile_indices(
    grid: &TerrainGrid,
    overlay: &OverrideOverlay,
    path: impl AsRef<Path>,
) -> Result<(), TerrainError> {
    let mut tiles = Vec::with_capacity(grid.height);
    for y in 0..grid.height {
        let row = (0..grid.width)
            .map(|x| resolve_tile(grid, overlay, x, y))
            .collect::<Result<Vec<_>, _>>()?;
        tiles.push(row);
    }

    let dump = TileDump {
        width: grid.width,
        height: grid.height,
        tiles,
    };
    fs::write(path, serde_json::to_string(&dump)?)?;
    Ok(())
}
