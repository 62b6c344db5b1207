//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the Game of Life engine: the grid, the transition rule and
//! the store that owns simulation state. It has **zero dependencies** on UI,
//! timers or I/O, making it:
//!
//! - **Deterministic**: the next generation is a pure function of the current one,
//!   and a seed fully determines a randomized grid
//! - **Testable**: every rule and store operation is unit tested
//! - **Portable**: runs under the terminal front end, the headless runner or an
//!   async driver alike
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size flat-array cell matrix with hard edges
//! - [`rules`]: the stateless [`TransitionEngine`] (B3/S23)
//! - [`store`]: [`GridStore`], the single owner of grid + generation counter
//! - [`rng`]: small seeded LCG used for randomization
//! - [`error`]: [`GridError`]
//!
//! # Double buffering
//!
//! [`TransitionEngine::next`] never mutates its input. It writes a complete new
//! grid, which [`GridStore::advance`] swaps in together with the generation
//! increment. Readers of the store see either the old generation or the new
//! one, never a mix.
//!
//! # Example
//!
//! ```
//! use tui_life_core::GridStore;
//!
//! // A vertical blinker on a 3x3 grid
//! let mut store = GridStore::new(3, 3).unwrap();
//! for row in 0..3 {
//!     store.toggle(row, 1).unwrap();
//! }
//!
//! store.advance();
//!
//! assert_eq!(store.generation(), 1);
//! assert_eq!(store.get_cell(1, 0), Ok(true));
//! assert_eq!(store.get_cell(0, 1), Ok(false));
//! ```

pub mod error;
pub mod grid;
pub mod rng;
pub mod rules;
pub mod store;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use error::GridError;
pub use grid::{Grid, NEIGHBOR_OFFSETS};
pub use rng::SimpleRng;
pub use rules::TransitionEngine;
pub use store::{GridStore, PendingAdvance};
