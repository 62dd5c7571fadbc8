use rayon::prelude::*;

use crate::error::TerrainError;

/// A 2D tilemap grid, row-major, `(0, 0)` at the top-left. Edges do not wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Result<Self, TerrainError> {
        Self::new_with(width, height, T::default())
    }
}

impl<T: Clone> Tilemap<T> {
    /// Create a grid filled with `value`. Both dimensions must be positive.
    pub fn new_with(width: usize, height: usize, value: T) -> Result<Self, TerrainError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; width * height],
        })
    }

    /// Build a grid from nested rows (`rows[y][x]`).
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, TerrainError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;

        let mut data = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(TerrainError::RaggedRows { row, expected: width, found: cells.len() });
            }
            data.extend(cells);
        }

        Ok(Self { width, height, data })
    }

    /// Copy the grid back out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.width).map(<[T]>::to_vec).collect()
    }

    /// Fill the entire map with a value.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Build a new grid of the same shape by mapping every cell.
    pub fn map<U, F>(&self, mut f: F) -> Tilemap<U>
    where
        F: FnMut(usize, usize, &T) -> U,
    {
        let data = self.iter().map(|(x, y, v)| f(x, y, v)).collect();
        Tilemap {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

impl<T> Tilemap<T> {
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Signed variant of [`in_bounds`](Self::in_bounds) for neighbor offsets.
    pub fn in_bounds_i(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Fail with `OutOfBounds` unless `(x, y)` lies inside the grid.
    pub fn check(&self, x: usize, y: usize) -> Result<(), TerrainError> {
        if self.in_bounds(x, y) {
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

    /// Panics when `(x, y)` is out of bounds; use [`try_get`](Self::try_get) for queries.
    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn try_get(&self, x: usize, y: usize) -> Option<&T> {
        if self.in_bounds(x, y) {
            Some(self.get(x, y))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Whether the cell is at least one step away from every edge.
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x > 0 && y > 0 && x + 1 < self.width && y + 1 < self.height
    }

    /// Get neighbors (4-connectivity): up, right, down, left.
    /// Cells on the edge return fewer than 4.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(4);

        if y > 0 {
            result.push((x, y - 1));
        }
        if x + 1 < self.width {
            result.push((x + 1, y));
        }
        if y + 1 < self.height {
            result.push((x, y + 1));
        }
        if x > 0 {
            result.push((x - 1, y));
        }

        result
    }

    /// Get 8-connected neighbors in row-major order, skipping cells off the map.
    pub fn neighbors_8(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(8);

        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if self.in_bounds_i(nx, ny) {
                    result.push((nx as usize, ny as usize));
                }
            }
        }

        result
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }

    /// Iterate mutably over all cells with their coordinates.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let width = self.width;
        self.data.iter_mut().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }

    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl<T: Send> Tilemap<T> {
    /// Rows as mutable slices, for row-parallel passes. Yields `(y, row)`.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = (usize, &mut [T])> + '_ {
        self.data.par_chunks_mut(self.width).enumerate()
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), TerrainError> {
    if width == 0 || height == 0 {
        Err(TerrainError::InvalidDimensions { width, height })
    } else {
        Ok(())
    }
}
