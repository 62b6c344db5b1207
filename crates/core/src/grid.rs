//! Grid module - the cell matrix of one generation
//!
//! A grid is a fixed `rows x columns` rectangle of live/dead cells with hard
//! edges: coordinates outside the rectangle do not exist and nothing wraps.
//! Cells live in a flat `Vec<bool>` in row-major order (`row * columns + col`)
//! for cache locality; row-oriented views are provided on top of it.
//! Coordinates: `(row, col)` where row ranges `0..rows` (top to bottom) and col
//! ranges `0..columns` (left to right).

use std::hash::Hasher;

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::types::Coord;

/// Relative positions of the eight cells surrounding a cell, as `(d_row, d_col)`.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size matrix of live/dead cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Row-major cell states, always `rows * columns` long
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Fails with [`GridError::InvalidDimension`] when either side is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        let len = checked_len(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![false; len],
        })
    }

    /// Create a grid whose cells are produced by `f(coord)`.
    pub fn from_fn(
        rows: usize,
        columns: usize,
        mut f: impl FnMut(Coord) -> bool,
    ) -> Result<Self, GridError> {
        let len = checked_len(rows, columns)?;
        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..columns {
                cells.push(f(Coord::new(row, col)));
            }
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Build a grid from a list of rows.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|r| r.len() != columns) {
            return Err(GridError::InvalidDimension {
                rows: rows.len(),
                columns,
            });
        }
        Self::from_fn(rows.len(), columns, |c| rows[c.row][c.col])
    }

    /// Build a grid with exactly the listed cells alive.
    pub fn with_live_cells(
        rows: usize,
        columns: usize,
        live: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, columns)?;
        for &(row, col) in live {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        Some(row * self.columns + col)
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> GridError {
        GridError::OutOfBounds {
            row,
            column: col,
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Cell state at `(row, col)`, `None` when out of bounds
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Signed lookup; negative or too-large coordinates are `None`.
    #[inline]
    pub fn get_signed(&self, row: i64, col: i64) -> Option<bool> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Cell state, or [`GridError::OutOfBounds`]
    pub fn cell(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.get(row, col).ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Set one cell. Nothing changes when the coordinate is invalid.
    pub fn set(&mut self, row: usize, col: usize, live: bool) -> Result<(), GridError> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.cells[idx] = live;
        Ok(())
    }

    /// Flip one cell and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// In-bounds neighbors of `(row, col)`.
    ///
    /// Corners have 3, edges 5, interior cells 8. Offsets that fall off the
    /// grid are skipped, never wrapped. Stack-only, no allocation.
    pub fn neighbors(&self, row: usize, col: usize) -> ArrayVec<Coord, 8> {
        let mut out = ArrayVec::new();
        if !self.contains(row, col) {
            return out;
        }
        for &(dr, dc) in NEIGHBOR_OFFSETS.iter() {
            let r = row as i64 + dr as i64;
            let c = col as i64 + dc as i64;
            if r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.columns {
                out.push(Coord::new(r as usize, c as usize));
            }
        }
        out
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Coordinates of every live cell, row by row
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &live)| live)
            .map(move |(i, _)| Coord::new(i / columns, i % columns))
    }

    /// One row as a slice, `None` when out of bounds
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    /// Flat row-major cell slice
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Copy out as a list of rows
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.columns)
            .map(|row| row.to_vec())
            .collect()
    }

    /// All-dead grid with the same dimensions as `self`.
    pub(crate) fn dead_like(&self) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            cells: vec![false; self.cells.len()],
        }
    }

    /// Mutable row-major cells, for whole-grid rewrites inside the crate.
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Set every cell to dead, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Stable 64-bit FNV-1a digest of dimensions and contents.
    ///
    /// `DefaultHasher` output is not guaranteed stable across Rust versions,
    /// so renderers and tests use this instead.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        h.write_u64(self.rows as u64);
        h.write_u64(self.columns as u64);
        for chunk in self.cells.chunks(8) {
            let mut byte = 0u8;
            for (bit, &live) in chunk.iter().enumerate() {
                byte |= (live as u8) << bit;
            }
            h.write_u8(byte);
        }
        h.finish()
    }
}

fn checked_len(rows: usize, columns: usize) -> Result<usize, GridError> {
    if rows == 0 || columns == 0 {
        return Err(GridError::InvalidDimension { rows, columns });
    }
    rows.checked_mul(columns)
        .ok_or(GridError::InvalidDimension { rows, columns })
}

#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
