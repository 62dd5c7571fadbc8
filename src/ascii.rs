//! ASCII rendering of terrain grids
//!
//! Plain and ANSI-colored text views, used by the CLI for quick inspection.

use crate::pathfinding::Position;
use crate::terrain::{TerrainGrid, TerrainType};

/// ASCII rendering modes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AsciiMode {
    /// Show terrain characters
    Terrain,
    /// Show the walkability mask
    Walkable,
}

impl AsciiMode {
    pub fn name(&self) -> &'static str {
        match self {
            AsciiMode::Terrain => "Terrain",
            AsciiMode::Walkable => "Walkable",
        }
    }
}

/// Get ASCII character for a terrain type
pub fn terrain_char(terrain: TerrainType) -> char {
    match terrain {
        TerrainType::Grass => '"',
        TerrainType::Water => '~',
        TerrainType::Dirt => '.',
    }
}

/// Base RGB color for a terrain type, shared with the PNG export.
pub fn terrain_color(terrain: TerrainType) -> (u8, u8, u8) {
    match terrain {
        TerrainType::Grass => (96, 168, 72),
        TerrainType::Water => (48, 96, 200),
        TerrainType::Dirt => (160, 120, 72),
    }
}

pub fn render_ascii_map(grid: &TerrainGrid, mode: AsciiMode) -> String {
    let mut result = String::with_capacity((grid.width + 1) * grid.height);

    for y in 0..grid.height {
        for &terrain in grid.row(y) {
            let ch = match mode {
                AsciiMode::Terrain => terrain_char(terrain),
                AsciiMode::Walkable => {
                    if terrain.is_walkable() {
                        '.'
                    } else {
                        '#'
                    }
                }
            };
            result.push(ch);
        }
        result.push('\n');
    }

    result
}

/// Terrain view with the cells of `path` drawn as `*`.
pub fn render_with_path(grid: &TerrainGrid, path: &[Position]) -> String {
    let mut lines: Vec<Vec<char>> = (0..grid.height)
        .map(|y| grid.row(y).iter().map(|&t| terrain_char(t)).collect())
        .collect();

    for &(x, y) in path {
        if grid.in_bounds(x, y) {
            lines[y][x] = '*';
        }
    }

    let mut result = String::with_capacity((grid.width + 1) * grid.height);
    for line in lines {
        result.extend(line);
        result.push('\n');
    }
    result
}

/// Generate legend for terrain characters
pub fn terrain_legend() -> String {
    let mut legend = String::new();
    legend.push_str("=== TERRAIN LEGEND ===\n");
    for terrain in TerrainType::ALL {
        legend.push_str(&format!("  {} {}\n", terrain_char(terrain), terrain));
    }
    legend.push_str("  * Path\n");
    legend
}

/// Format a single character with ANSI true color (24-bit) - foreground and background
pub fn ansi_colored_char(ch: char, fg: (u8, u8, u8), bg: (u8, u8, u8)) -> String {
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}\x1b[0m",
        fg.0, fg.1, fg.2,
        bg.0, bg.1, bg.2,
        ch
    )
}

/// Render a colorized terrain map to string with ANSI codes
pub fn render_colored_ascii_map(grid: &TerrainGrid) -> String {
    // Estimate: each cell needs ~40 bytes for ANSI codes
    let mut result = String::with_capacity(grid.width * grid.height * 45);

    for y in 0..grid.height {
        for &terrain in grid.row(y) {
            let bg = terrain_color(terrain);
            let fg = (bg.0.saturating_add(60), bg.1.saturating_add(60), bg.2.saturating_add(60));
            result.push_str(&ansi_colored_char(terrain_char(terrain), fg, bg));
        }
        result.push_str("\x1b[0m\n"); // Reset at end of line
    }

    result
}
