//! Errors surfaced by the simulation core.
//!
//! All of them are local and recoverable: the operation that reports one has
//! not touched the store.

use thiserror::Error;

/// Errors from grid and store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows or columns was zero.
    #[error("invalid grid dimensions {rows}x{columns}: both must be positive")]
    InvalidDimension { rows: usize, columns: usize },

    /// Coordinate lies outside the current grid.
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// A computed generation was based on a store revision that has since
    /// been replaced (resize, clear, toggle, randomize or another advance).
    #[error("advance computed against revision {based_on}, store is at revision {current}")]
    StaleAdvance { based_on: u64, current: u64 },
}
