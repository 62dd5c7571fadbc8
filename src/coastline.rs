//! Shoreline post-processing
//!
//! A single pass after smoothing: land that touches water on a cardinal side
//! becomes dirt, giving every lake and sea a beach. Diagonal contact does not
//! count. The pass reads the pre-pass grid only, so newly converted cells
//! never trigger further conversions.

use crate::terrain::{TerrainGrid, TerrainType};

/// Convert shoreline cells to dirt. Border cells are left alone.
pub fn apply_coast(grid: &TerrainGrid) -> TerrainGrid {
    let mut out = grid.clone();
    for (x, y) in coastline_cells(grid) {
        out.set(x, y, TerrainType::Dirt);
    }
    out
}

/// Interior land cells with at least one cardinal water neighbor, row-major.
pub fn coastline_cells(grid: &TerrainGrid) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|&(x, y, &terrain)| {
            terrain != TerrainType::Water
                && grid.is_interior(x, y)
                && grid
                    .neighbors(x, y)
                    .into_iter()
                    .any(|(nx, ny)| *grid.get(nx, ny) == TerrainType::Water)
        })
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TerrainType::{Dirt, Grass, Water};

    #[test]
    fn test_cardinal_neighbor_becomes_dirt() {
        let mut grid = TerrainGrid::new_with(5, 5, Grass).unwrap();
        grid.set(2, 2, Water);
        let out = apply_coast(&grid);

        assert_eq!(*out.get(2, 1), Dirt);
        assert_eq!(*out.get(1, 2), Dirt);
        assert_eq!(*out.get(3, 2), Dirt);
        assert_eq!(*out.get(2, 3), Dirt);
        assert_eq!(*out.get(2, 2), Water);
    }

    #[test]
    fn test_diagonals_ignored() {
        let mut grid = TerrainGrid::new_with(5, 5, Grass).unwrap();
        grid.set(2, 2, Water);
        let out = apply_coast(&grid);

        assert_eq!(*out.get(1, 1), Grass);
        assert_eq!(*out.get(3, 3), Grass);
    }

    #[test]
    fn test_single_pass_does_not_cascade() {
        let mut grid = TerrainGrid::new_with(7, 3, Grass).unwrap();
        grid.set(0, 1, Water);
        let out = apply_coast(&grid);

        assert_eq!(*out.get(1, 1), Dirt);
        assert_eq!(*out.get(2, 1), Grass);
    }

    #[test]
    fn test_border_cells_untouched() {
        let mut grid = TerrainGrid::new_with(4, 4, Grass).unwrap();
        grid.set(1, 1, Water);
        let out = apply_coast(&grid);

        assert_eq!(*out.get(1, 0), Grass);
        assert_eq!(*out.get(0, 1), Grass);
        assert_eq!(*out.get(2, 1), Dirt);
        assert_eq!(*out.get(1, 2), Dirt);
    }

    #[test]
    fn test_coastal_invariant_on_mixed_grid() {
        let rows = vec![
            vec![Water, Grass, Dirt, Grass, Water, Grass],
            vec![Grass, Water, Grass, Dirt, Grass, Grass],
            vec![Dirt, Grass, Grass, Water, Dirt, Water],
            vec![Grass, Dirt, Water, Grass, Grass, Grass],
            vec![Water, Grass, Grass, Grass, Dirt, Water],
        ];
        let grid = TerrainGrid::from_rows(rows).unwrap();
        let out = apply_coast(&grid);

        for (x, y, &before) in grid.iter() {
            let after = *out.get(x, y);
            let touches_water = grid
                .neighbors(x, y)
                .into_iter()
                .any(|(nx, ny)| *grid.get(nx, ny) == Water);

            if before != Water && touches_water && grid.is_interior(x, y) {
                assert_eq!(after, Dirt, "({}, {}) should be dirt", x, y);
            } else {
                assert_eq!(after, before, "({}, {}) should be unchanged", x, y);
            }
        }
    }
}
