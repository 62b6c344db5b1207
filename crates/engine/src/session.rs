//! Session - the single-threaded driver around a `GridStore`
//!
//! A session owns the store, the playback cadence and the edit cursor. The
//! front end forwards every user action and every frame tick here, so all
//! mutation is funneled through one `&mut self` handler and never interleaves.

use tracing::{debug, warn};

use crate::config::LifeConfig;
use crate::core::{Grid, GridError, GridStore};
use crate::error::EngineError;
use crate::playback::Playback;
use crate::types::{Coord, LifeAction, SpeedPreset};

/// Point-in-time summary for status displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub generation: u64,
    pub population: usize,
    pub rows: usize,
    pub columns: usize,
    pub running: bool,
    pub interval_ms: u32,
    pub speed: Option<SpeedPreset>,
    pub cursor: Coord,
}

#[derive(Debug, Clone)]
pub struct Session {
    store: GridStore,
    playback: Playback,
    cursor: Coord,
    density: f64,
}

impl Session {
    /// Build a stopped session from configuration.
    pub fn new(config: &LifeConfig, seed: u32) -> Result<Self, EngineError> {
        let (rows, columns) = config.dimensions();
        let store = GridStore::with_seed(rows, columns, seed)?;
        let playback = Playback::new(config.interval_ms)?;
        debug!(rows, columns, seed, "session created");
        Ok(Self {
            store,
            playback,
            cursor: Coord::default(),
            density: config.density,
        })
    }

    /// Wrap an existing store.
    pub fn with_store(store: GridStore, interval_ms: u32, density: f64) -> Result<Self, EngineError> {
        Ok(Self {
            store,
            playback: Playback::new(interval_ms)?,
            cursor: Coord::default(),
            density,
        })
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn grid(&self) -> &Grid {
        self.store.grid()
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn status(&self) -> SessionStatus {
        let (rows, columns) = self.store.dimensions();
        SessionStatus {
            generation: self.store.generation(),
            population: self.store.population(),
            rows,
            columns,
            running: self.playback.is_running(),
            interval_ms: self.playback.interval_ms(),
            speed: self.playback.speed(),
            cursor: self.cursor,
        }
    }

    /// Apply a user action. Returns `true` when anything changed.
    pub fn apply_action(&mut self, action: LifeAction) -> bool {
        match action {
            LifeAction::Start => {
                let was = self.playback.is_running();
                self.playback.start();
                !was
            }
            LifeAction::Stop => {
                let was = self.playback.is_running();
                self.playback.stop();
                was
            }
            LifeAction::TogglePlay => {
                self.playback.toggle();
                true
            }
            LifeAction::Step => {
                self.store.advance();
                true
            }
            LifeAction::Randomize => {
                self.store.randomize(self.density);
                true
            }
            LifeAction::Clear => {
                self.store.clear();
                self.playback.restart_interval();
                true
            }
            LifeAction::Fast => {
                self.playback.set_speed(SpeedPreset::Fast);
                true
            }
            LifeAction::Slow => {
                self.playback.set_speed(SpeedPreset::Slow);
                true
            }
            LifeAction::Resize(preset) => match self.store.resize_preset(preset) {
                Ok(()) => {
                    self.playback.restart_interval();
                    self.clamp_cursor();
                    true
                }
                Err(e) => {
                    warn!(error = %e, preset = preset.as_str(), "resize rejected");
                    false
                }
            },
            LifeAction::CursorUp => self.move_cursor(-1, 0),
            LifeAction::CursorDown => self.move_cursor(1, 0),
            LifeAction::CursorLeft => self.move_cursor(0, -1),
            LifeAction::CursorRight => self.move_cursor(0, 1),
            LifeAction::ToggleCursor => self.toggle_at(self.cursor).is_ok(),
        }
    }

    /// Flip the cell at `coord` and move the cursor there.
    pub fn toggle_at(&mut self, coord: Coord) -> Result<bool, GridError> {
        let live = self.store.toggle(coord.row, coord.col)?;
        self.cursor = coord;
        Ok(live)
    }

    /// Feed frame time; advances as many generations as are due.
    ///
    /// Returns the number of generations advanced.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.playback.tick(elapsed_ms);
        for _ in 0..due {
            self.store.advance();
        }
        due
    }

    fn move_cursor(&mut self, d_row: i64, d_col: i64) -> bool {
        let (rows, columns) = self.store.dimensions();
        let row = (self.cursor.row as i64 + d_row).clamp(0, rows as i64 - 1) as usize;
        let col = (self.cursor.col as i64 + d_col).clamp(0, columns as i64 - 1) as usize;
        let moved = Coord::new(row, col) != self.cursor;
        self.cursor = Coord::new(row, col);
        moved
    }

    fn clamp_cursor(&mut self) {
        let (rows, columns) = self.store.dimensions();
        self.cursor = Coord::new(self.cursor.row.min(rows - 1), self.cursor.col.min(columns - 1));
    }
}
