//! Cellular-automaton smoothing
//!
//! Each round is a majority vote over the 8 neighbors of every interior cell.
//! A round reads only the snapshot taken at its start and writes into a fresh
//! buffer, so results never depend on cell visiting order and rows can be
//! processed in parallel. Border cells are never rewritten.

use rayon::prelude::*;

use crate::config::SmoothingRules;
use crate::terrain::{TerrainGrid, TerrainType};

/// Smooth with the default thresholds (6 for water, 5 otherwise).
pub fn smooth(grid: &TerrainGrid, iterations: u32) -> TerrainGrid {
    smooth_with(grid, iterations, &SmoothingRules::default())
}

pub fn smooth_with(grid: &TerrainGrid, iterations: u32, rules: &SmoothingRules) -> TerrainGrid {
    let mut current = grid.clone();

    for round in 0..iterations {
        let next = smooth_round(&current, rules);
        log::trace!(
            "smoothing round {}: {} cells changed",
            round + 1,
            count_changes(&current, &next)
        );
        current = next;
    }

    current
}

/// One round. `snapshot` is read-only for the whole round.
fn smooth_round(snapshot: &TerrainGrid, rules: &SmoothingRules) -> TerrainGrid {
    let mut next = snapshot.clone();
    let width = snapshot.width;
    let height = snapshot.height;

    next.par_rows_mut()
        .filter(|(y, _)| *y > 0 && *y + 1 < height)
        .for_each(|(y, row)| {
            for x in 1..width.saturating_sub(1) {
                row[x] = vote(snapshot, x, y, rules);
            }
        });

    next
}

/// New terrain for an interior cell, given the frozen snapshot.
fn vote(snapshot: &TerrainGrid, x: usize, y: usize, rules: &SmoothingRules) -> TerrainType {
    let current = *snapshot.get(x, y);
    let counts = neighbor_counts(snapshot, x, y);

    // Strictly greater keeps the earliest-declared terrain on ties
    let mut most_common = TerrainType::ALL[0];
    for terrain in TerrainType::ALL {
        if counts[terrain.index()] > counts[most_common.index()] {
            most_common = terrain;
        }
    }

    let threshold = match current {
        TerrainType::Water => rules.water_threshold,
        _ => rules.default_threshold,
    };

    if counts[most_common.index()] >= threshold {
        most_common
    } else {
        current
    }
}

/// Occurrences of each terrain among the 8 neighbors, indexed by `TerrainType::index`.
pub fn neighbor_counts(grid: &TerrainGrid, x: usize, y: usize) -> [u8; TerrainType::COUNT] {
    let mut counts = [0u8; TerrainType::COUNT];
    for (nx, ny) in grid.neighbors_8(x, y) {
        counts[grid.get(nx, ny).index()] += 1;
    }
    counts
}

fn count_changes(before: &TerrainGrid, after: &TerrainGrid) -> usize {
    before
        .iter()
        .filter(|&(x, y, t)| after.get(x, y) != t)
        .count()
}
