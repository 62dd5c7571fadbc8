//! A* pathfinding over the walkable cells of a terrain grid
//!
//! 8-directional movement with a uniform step cost of 1 and a Manhattan
//! distance heuristic. With diagonal steps allowed Manhattan can overestimate,
//! so paths are near-optimal around obstacles; on open ground the search
//! takes diagonals first and matches the Chebyshev distance.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::TerrainError;
use crate::terrain::{TerrainGrid, TerrainType};
use crate::tilemap::Tilemap;

pub type Position = (usize, usize);

/// Open-set entry. Ordered for a min-heap on `f`, then insertion order.
#[derive(Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: usize,
    seq: u64,
    pos: Position,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a path with the default walkability (anything but water).
pub fn find_path(grid: &TerrainGrid, start: Position, goal: Position) -> Result<Vec<Position>, TerrainError> {
    find_path_with(grid, start, goal, TerrainType::is_walkable)
}

/// Find a path from `start` to `goal`, both included. An empty vector means
/// no path exists; that includes an unwalkable start or goal.
pub fn find_path_with<W>(
    grid: &TerrainGrid,
    start: Position,
    goal: Position,
    walkable: W,
) -> Result<Vec<Position>, TerrainError>
where
    W: Fn(TerrainType) -> bool,
{
    grid.check(start.0, start.1)?;
    grid.check(goal.0, goal.1)?;

    if !walkable(*grid.get(start.0, start.1)) || !walkable(*grid.get(goal.0, goal.1)) {
        return Ok(Vec::new());
    }

    let mut open = BinaryHeap::new();
    let mut closed: HashSet<Position> = HashSet::new();
    let mut g_score: HashMap<Position, usize> = HashMap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut seq = 0u64;

    g_score.insert(start, 0);
    open.push(OpenNode { f: manhattan(start, goal), seq, pos: start });

    while let Some(OpenNode { pos, .. }) = open.pop() {
        if pos == goal {
            return Ok(reconstruct(&came_from, goal));
        }
        if !closed.insert(pos) {
            continue;
        }

        let g = g_score[&pos];
        for next in grid.neighbors_8(pos.0, pos.1) {
            if closed.contains(&next) || !walkable(*grid.get(next.0, next.1)) {
                continue;
            }

            let tentative = g + 1;
            if g_score.get(&next).is_some_and(|&known| tentative >= known) {
                continue;
            }

            g_score.insert(next, tentative);
            came_from.insert(next, pos);
            seq += 1;
            open.push(OpenNode { f: tentative + manhattan(next, goal), seq, pos: next });
        }
    }

    log::debug!("no path from {:?} to {:?}", start, goal);
    Ok(Vec::new())
}

/// Derived walkability mask using the default policy.
pub fn walkability_mask(grid: &TerrainGrid) -> Tilemap<bool> {
    grid.map(|_, _, terrain| terrain.is_walkable())
}

fn manhattan(a: Position, b: Position) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

fn reconstruct(came_from: &HashMap<Position, Position>, goal: Position) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
