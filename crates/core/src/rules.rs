//! Transition rules - computes generation N+1 from generation N
//!
//! The next grid is always written into fresh memory. Each cell's fate is
//! decided from the *old* grid only, so cells updated earlier in the sweep can
//! never leak into the neighbor counts of cells updated later.
//!
//! Rule (B3/S23):
//! - live with 2 or 3 live neighbors stays live
//! - dead with exactly 3 live neighbors becomes live
//! - everything else is dead in the next generation

use crate::grid::{Grid, NEIGHBOR_OFFSETS};

/// Stateless Game of Life transition function.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionEngine;

impl TransitionEngine {
    /// Compute the generation after `grid`.
    ///
    /// `grid` is only read. The returned grid has identical dimensions and
    /// shares no memory with it.
    pub fn next(grid: &Grid) -> Grid {
        let columns = grid.columns();
        let mut next = grid.dead_like();

        for (i, (out, &alive)) in next.cells_mut().iter_mut().zip(grid.cells()).enumerate() {
            let n = Self::live_neighbors(grid, i / columns, i % columns);
            *out = Self::rule(alive, n);
        }

        next
    }

    /// Live cells among the in-bounds neighbors of `(row, col)`.
    #[inline]
    pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
        let mut n = 0u8;
        for &(dr, dc) in NEIGHBOR_OFFSETS.iter() {
            if grid
                .get_signed(row as i64 + dr as i64, col as i64 + dc as i64)
                .unwrap_or(false)
            {
                n += 1;
            }
        }
        n
    }

    /// Next state of a single cell given its current state and live neighbor count.
    #[inline]
    pub fn rule(alive: bool, live_neighbors: u8) -> bool {
        matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(TransitionEngine::rule(true, n), n == 2 || n == 3, "live, {n}");
            assert_eq!(TransitionEngine::rule(false, n), n == 3, "dead, {n}");
        }
    }

    #[test]
    fn test_live_neighbors_matches_neighbor_list() {
        let grid =
            Grid::with_live_cells(3, 3, &[(0, 0), (0, 1), (1, 0), (2, 2), (1, 1)]).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                let expected = grid
                    .neighbors(row, col)
                    .iter()
                    .filter(|c| grid.get(c.row, c.col) == Some(true))
                    .count() as u8;
                assert_eq!(TransitionEngine::live_neighbors(&grid, row, col), expected);
            }
        }
    }

    #[test]
    fn test_no_wraparound_across_edges() {
        // Live cells on the far column must not count for column 0.
        let grid = Grid::with_live_cells(3, 5, &[(0, 4), (1, 4), (2, 4)]).unwrap();
        assert_eq!(TransitionEngine::live_neighbors(&grid, 1, 0), 0);
        assert_eq!(TransitionEngine::live_neighbors(&grid, 1, 3), 3);
    }

    #[test]
    fn test_sweep_order_does_not_leak() {
        // An L-shaped tromino grows into a block; an in-place update would
        // kill (0,0) before (1,1) is evaluated and produce something else.
        let grid = Grid::with_live_cells(4, 4, &[(0, 0), (0, 1), (1, 0)]).unwrap();
        let next = TransitionEngine::next(&grid);
        let live: Vec<_> = next.live_cells().map(|c| (c.row, c.col)).collect();
        assert_eq!(live, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
