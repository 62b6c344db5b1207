//! Grid store - the single owner of simulation state
//!
//! `GridStore` holds the current grid, the generation counter and a revision
//! counter. Every mutation goes through it:
//!
//! - point edits: [`GridStore::toggle`], [`GridStore::set_cell`]
//! - bulk replacement: [`GridStore::resize`], [`GridStore::clear`], [`GridStore::randomize`]
//! - stepping: [`GridStore::advance`], or [`GridStore::prepare`] + [`GridStore::commit`]
//!   when the next generation is computed away from the store
//!
//! Mutators take `&mut self`, so a reader holding `&GridStore` can never see a
//! grid that is half way through an advance.

use tracing::{debug, trace};

use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::rules::TransitionEngine;
use crate::types::{GridPreset, DEFAULT_DENSITY, DEFAULT_SEED};

/// A computed next generation that has not been swapped in yet.
///
/// Produced by [`GridStore::prepare`] and consumed by [`GridStore::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAdvance {
    based_on: u64,
    next: Grid,
}

impl PendingAdvance {
    /// Compute the generation after `grid`, tagged with the store revision it
    /// was read at.
    pub fn compute(grid: &Grid, revision: u64) -> Self {
        Self {
            based_on: revision,
            next: TransitionEngine::next(grid),
        }
    }

    /// Store revision the computation started from
    pub fn based_on(&self) -> u64 {
        self.based_on
    }

    pub fn grid(&self) -> &Grid {
        &self.next
    }
}

/// Owner of the current grid and generation counter
#[derive(Debug, Clone)]
pub struct GridStore {
    grid: Grid,
    generation: u64,
    /// Bumped on every mutation; lets deferred advances detect they are stale
    revision: u64,
    rng: SimpleRng,
}

impl GridStore {
    /// Create a store holding an all-dead `rows x columns` grid at generation 0.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        Self::with_seed(rows, columns, DEFAULT_SEED)
    }

    /// Like [`GridStore::new`], seeding the RNG used by [`GridStore::randomize`].
    pub fn with_seed(rows: usize, columns: usize, seed: u32) -> Result<Self, GridError> {
        let grid = Grid::new(rows, columns)?;
        Ok(Self::from_grid(grid, seed))
    }

    /// Take ownership of an existing grid; generation starts at 0.
    pub fn from_grid(grid: Grid, seed: u32) -> Self {
        Self {
            grid,
            generation: 0,
            revision: 0,
            rng: SimpleRng::new(seed),
        }
    }

    /// `(rows, columns)` of the current grid
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mutation counter. Changes whenever the grid or generation does.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Borrow the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Independent copy of the current grid.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// State of one cell, or [`GridError::OutOfBounds`].
    pub fn get_cell(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.grid.cell(row, col)
    }

    /// Flip one cell and return its new state.
    ///
    /// Fails with [`GridError::OutOfBounds`] without touching anything.
    /// The generation counter is never affected.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let live = self.grid.toggle(row, col)?;
        self.bump();
        trace!(row, col, live, "cell toggled");
        Ok(live)
    }

    /// Force one cell to a state.
    pub fn set_cell(&mut self, row: usize, col: usize, live: bool) -> Result<(), GridError> {
        self.grid.set(row, col, live)?;
        self.bump();
        Ok(())
    }

    /// Replace the grid with an all-dead `rows x columns` one and reset the
    /// generation to 0.
    ///
    /// On [`GridError::InvalidDimension`] the store is left exactly as it was.
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<(), GridError> {
        let grid = Grid::new(rows, columns)?;
        self.grid = grid;
        self.generation = 0;
        self.bump();
        debug!(rows, columns, "grid resized");
        Ok(())
    }

    /// Resize to one of the fixed presets.
    pub fn resize_preset(&mut self, preset: GridPreset) -> Result<(), GridError> {
        let (rows, columns) = preset.dimensions();
        self.resize(rows, columns)
    }

    /// Kill every cell and reset the generation to 0. Dimensions are kept.
    pub fn clear(&mut self) {
        self.grid = self.grid.dead_like();
        self.generation = 0;
        self.bump();
        debug!("grid cleared");
    }

    /// Refill every cell independently, live with probability `density`.
    ///
    /// Dimensions and generation are left alone. `density` is clamped to
    /// `[0, 1]`; NaN counts as 0.
    pub fn randomize(&mut self, density: f64) {
        let mut rng = std::mem::take(&mut self.rng);
        self.randomize_with(&mut rng, density);
        self.rng = rng;
    }

    /// [`GridStore::randomize`] at the default density of 0.5.
    pub fn randomize_default(&mut self) {
        self.randomize(DEFAULT_DENSITY);
    }

    /// [`GridStore::randomize`] drawing from a caller-supplied RNG.
    pub fn randomize_with(&mut self, rng: &mut SimpleRng, density: f64) {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        let mut next = self.grid.dead_like();
        for cell in next.cells_mut() {
            *cell = rng.gen_bool(density);
        }
        self.grid = next;
        self.bump();
        debug!(density, population = self.grid.population(), "grid randomized");
    }

    /// Step one generation and return the new generation number.
    ///
    /// The next grid is computed into fresh memory and swapped in together
    /// with the counter increment.
    pub fn advance(&mut self) -> u64 {
        let next = TransitionEngine::next(&self.grid);
        self.install(next)
    }

    /// Compute the next generation without installing it.
    pub fn prepare(&self) -> PendingAdvance {
        PendingAdvance::compute(&self.grid, self.revision)
    }

    /// Install a generation computed by [`GridStore::prepare`] (or
    /// [`PendingAdvance::compute`]).
    ///
    /// Fails with [`GridError::StaleAdvance`] when the store has been mutated
    /// since the computation started, leaving the newer state in place.
    pub fn commit(&mut self, pending: PendingAdvance) -> Result<u64, GridError> {
        if pending.based_on != self.revision {
            return Err(GridError::StaleAdvance {
                based_on: pending.based_on,
                current: self.revision,
            });
        }
        Ok(self.install(pending.next))
    }

    fn install(&mut self, next: Grid) -> u64 {
        self.grid = next;
        self.generation += 1;
        self.bump();
        trace!(generation = self.generation, "generation advanced");
        self.generation
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty_at_generation_zero() {
        let store = GridStore::new(3, 4).unwrap();
        assert_eq!(store.dimensions(), (3, 4));
        assert_eq!(store.generation(), 0);
        assert_eq!(store.population(), 0);
    }

    #[test]
    fn test_failed_resize_keeps_previous_state() {
        let mut store = GridStore::new(3, 3).unwrap();
        store.toggle(1, 1).unwrap();
        store.advance();
        let before = store.snapshot();
        let revision = store.revision();

        assert!(store.resize(0, 10).is_err());
        assert_eq!(store.snapshot(), before);
        assert_eq!(store.generation(), 1);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_commit_rejects_stale_pending() {
        let mut store = GridStore::new(4, 4).unwrap();
        let pending = store.prepare();
        store.toggle(0, 0).unwrap();

        let err = store.commit(pending).unwrap_err();
        assert!(matches!(err, GridError::StaleAdvance { .. }));
        assert_eq!(store.generation(), 0);
        assert_eq!(store.get_cell(0, 0), Ok(true));
    }

    #[test]
    fn test_commit_fresh_pending_advances() {
        let mut store = GridStore::new(3, 3).unwrap();
        for (r, c) in [(0, 1), (1, 1), (2, 1)] {
            store.set_cell(r, c, true).unwrap();
        }
        let pending = store.prepare();
        assert_eq!(store.commit(pending), Ok(1));
        assert_eq!(store.get_cell(1, 0), Ok(true));
        assert_eq!(store.get_cell(0, 1), Ok(false));
    }

    #[test]
    fn test_randomize_is_seeded() {
        let mut a = GridStore::with_seed(10, 10, 42).unwrap();
        let mut b = GridStore::with_seed(10, 10, 42).unwrap();
        a.randomize(0.5);
        b.randomize(0.5);
        assert_eq!(a.snapshot(), b.snapshot());

        // The store's RNG moves on, so a second randomize differs.
        let first = a.snapshot();
        a.randomize(0.5);
        assert_ne!(a.snapshot(), first);
    }

    #[test]
    fn test_randomize_nan_density_kills_everything() {
        let mut store = GridStore::new(5, 5).unwrap();
        store.randomize(1.0);
        assert_eq!(store.population(), 25);
        store.randomize(f64::NAN);
        assert_eq!(store.population(), 0);
    }
}
