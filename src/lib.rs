//! TUI Life (workspace facade crate).
//!
//! Re-exports the member crates under `tui_life::{core,engine,input,term,types}`
//! and hosts the pieces shared by the two binaries: tracing setup and the
//! headless runner.

pub mod headless;
pub mod logging;

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;

use std::time::{SystemTime, UNIX_EPOCH};

/// Seed derived from the wall clock, for runs without `LIFE_SEED`.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(types::DEFAULT_SEED)
}
