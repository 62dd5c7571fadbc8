//! Manual tile overrides
//!
//! A sparse layer of hand-placed sprites on top of the autotiler. `paint` is
//! the only side-effecting operation in the engine: every successful call
//! runs the registered listeners synchronously, in registration order, before
//! returning. Listeners receive a diff of the single changed cell so
//! persistence, network sync or undo layers can react.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::autotile::{AutotileResolver, SpritePosition};
use crate::error::TerrainError;
use crate::terrain::TerrainGrid;

/// The effect of one `paint` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OverlayChange {
    pub x: usize,
    pub y: usize,
    pub previous: Option<SpritePosition>,
    pub current: Option<SpritePosition>,
}

impl OverlayChange {
    /// Whether the paint actually altered the overlay.
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

pub type OverlayListener = Box<dyn FnMut(&OverlayChange) + Send>;

/// Sparse `(x, y) -> sprite` overrides for a grid of fixed size.
pub struct OverrideOverlay {
    width: usize,
    height: usize,
    // Keyed (y, x) so iteration is row-major
    overrides: BTreeMap<(usize, usize), SpritePosition>,
    listeners: Vec<OverlayListener>,
}

impl OverrideOverlay {
    /// An empty overlay covering a `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            overrides: BTreeMap::new(),
            listeners: Vec::new(),
        }
    }

    pub fn for_grid(grid: &TerrainGrid) -> Self {
        Self::new(grid.width, grid.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Register a listener called after every successful `paint`.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&OverlayChange) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn get(&self, x: usize, y: usize) -> Option<SpritePosition> {
        self.overrides.get(&(y, x)).copied()
    }

    /// Set (`Some`) or clear (`None`) the override at `(x, y)` and notify
    /// listeners. Listeners also run when the value did not change.
    pub fn paint(
        &mut self,
        x: usize,
        y: usize,
        sprite: Option<SpritePosition>,
    ) -> Result<OverlayChange, TerrainError> {
        self.check(x, y)?;

        let previous = match sprite {
            Some(sprite) => self.overrides.insert((y, x), sprite),
            None => self.overrides.remove(&(y, x)),
        };
        let change = OverlayChange { x, y, previous, current: sprite };

        log::trace!("overlay paint at ({}, {}): {:?} -> {:?}", x, y, previous, sprite);
        self.notify(&change);
        Ok(change)
    }

    /// Remove every override, one notification per removed cell.
    pub fn clear_all(&mut self) -> Vec<OverlayChange> {
        let removed = std::mem::take(&mut self.overrides);
        let changes: Vec<OverlayChange> = removed
            .into_iter()
            .map(|((y, x), sprite)| OverlayChange {
                x,
                y,
                previous: Some(sprite),
                current: None,
            })
            .collect();

        for change in &changes {
            self.notify(change);
        }
        changes
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Overrides in row-major order as `(x, y, sprite)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, SpritePosition)> + '_ {
        self.overrides.iter().map(|(&(y, x), &sprite)| (x, y, sprite))
    }

    fn check(&self, x: usize, y: usize) -> Result<(), TerrainError> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(TerrainError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn notify(&mut self, change: &OverlayChange) {
        for listener in self.listeners.iter_mut() {
            listener(change);
        }
    }
}

impl fmt::Debug for OverrideOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideOverlay")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("overrides", &self.overrides)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// The sprite to draw at `(x, y)`: the override if one is set, else the
/// autotiled sprite from the standard rules.
pub fn resolve_tile(
    grid: &TerrainGrid,
    overlay: &OverrideOverlay,
    x: usize,
    y: usize,
) -> Result<SpritePosition, TerrainError> {
    resolve_tile_with(AutotileResolver::standard(), grid, overlay, x, y)
}

pub fn resolve_tile_with(
    resolver: &AutotileResolver,
    grid: &TerrainGrid,
    overlay: &OverrideOverlay,
    x: usize,
    y: usize,
) -> Result<SpritePosition, TerrainError> {
    grid.check(x, y)?;
    match overlay.get(x, y) {
        Some(sprite) => Ok(sprite),
        None => resolver.resolve(grid, x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autotile::resolve;
    use crate::terrain::TerrainType::{Dirt, Grass, Water};
    use std::sync::{Arc, Mutex};

    fn sample_grid() -> TerrainGrid {
        TerrainGrid::from_rows(vec![
            vec![Grass, Grass, Water, Water, Grass],
            vec![Grass, Dirt, Water, Grass, Grass],
            vec![Dirt, Dirt, Grass, Grass, Water],
            vec![Grass, Grass, Grass, Dirt, Water],
        ])
        .unwrap()
    }

    #[test]
    fn test_paint_and_clear() {
        let mut overlay = OverrideOverlay::new(4, 4);
        let sprite = SpritePosition::new(12, 3);

        let change = overlay.paint(1, 2, Some(sprite)).unwrap();
        assert_eq!(change.previous, None);
        assert_eq!(overlay.get(1, 2), Some(sprite));
        assert_eq!(overlay.len(), 1);

        let change = overlay.paint(1, 2, None).unwrap();
        assert_eq!(change.previous, Some(sprite));
        assert_eq!(change.current, None);
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_paint_out_of_bounds() {
        let mut overlay = OverrideOverlay::new(4, 4);
        assert!(matches!(
            overlay.paint(4, 0, Some(SpritePosition::new(0, 0))),
            Err(TerrainError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_listeners_run_in_order_before_return() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut overlay = OverrideOverlay::new(3, 3);

        let first = log.clone();
        overlay.subscribe(move |c: &OverlayChange| first.lock().unwrap().push(("a", *c)));
        let second = log.clone();
        overlay.subscribe(move |c: &OverlayChange| second.lock().unwrap().push(("b", *c)));

        let change = overlay.paint(0, 1, Some(SpritePosition::new(2, 2))).unwrap();
        {
            let seen = log.lock().unwrap();
            assert_eq!(seen.len(), 2);
            assert_eq!(seen[0], ("a", change));
            assert_eq!(seen[1], ("b", change));
        }

        overlay.paint(0, 1, None).unwrap();
        assert_eq!(log.lock().unwrap().len(), 4);
    }

    #[test]
    fn test_failed_paint_does_not_notify() {
        let count = Arc::new(Mutex::new(0));
        let mut overlay = OverrideOverlay::new(2, 2);
        let c = count.clone();
        overlay.subscribe(move |_| *c.lock().unwrap() += 1);

        assert!(overlay.paint(5, 5, None).is_err());
        assert_eq!(*count.lock().unwrap(), 0);
    }

    #[test]
    fn test_clear_all_notifies_each_cell() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let mut overlay = OverrideOverlay::new(3, 3);
        overlay.paint(2, 0, Some(SpritePosition::new(1, 1))).unwrap();
        overlay.paint(0, 2, Some(SpritePosition::new(1, 2))).unwrap();

        let sink = changes.clone();
        overlay.subscribe(move |c| sink.lock().unwrap().push(*c));
        let removed = overlay.clear_all();

        assert_eq!(removed.len(), 2);
        assert!(overlay.is_empty());
        assert_eq!(*changes.lock().unwrap(), removed);
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut overlay = OverrideOverlay::new(3, 3);
        overlay.paint(2, 0, Some(SpritePosition::new(1, 1))).unwrap();
        overlay.paint(0, 1, Some(SpritePosition::new(2, 1))).unwrap();
        overlay.paint(1, 0, Some(SpritePosition::new(3, 1))).unwrap();
        let cells: Vec<_> = overlay.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(cells, vec![(1, 0), (2, 0), (0, 1)]);
    }

    #[test]
    fn test_paint_only_changes_painted_cell() {
        let grid = sample_grid();
        let mut overlay = OverrideOverlay::for_grid(&grid);

        let before: Vec<_> = grid
            .iter()
            .map(|(x, y, _)| resolve_tile(&grid, &overlay, x, y).unwrap())
            .collect();

        let sprite = SpritePosition::new(15, 15);
        overlay.paint(3, 1, Some(sprite)).unwrap();

        for (i, (x, y, _)) in grid.iter().enumerate() {
            let now = resolve_tile(&grid, &overlay, x, y).unwrap();
            if (x, y) == (3, 1) {
                assert_eq!(now, sprite);
            } else {
                assert_eq!(now, before[i], "({}, {}) changed", x, y);
            }
            // Terrain-driven resolution never sees the overlay
            assert_eq!(resolve(&grid, x, y).unwrap(), before[i]);
        }
    }

    #[test]
    fn test_resolve_tile_out_of_bounds() {
        let grid = sample_grid();
        let overlay = OverrideOverlay::for_grid(&grid);
        assert!(resolve_tile(&grid, &overlay, 0, 4).is_err());
    }
}
