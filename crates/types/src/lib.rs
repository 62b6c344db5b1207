//! Core types module - shared data structures and constants
//!
//! This module defines the plain types used throughout the application.
//! Everything here is dependency-free data, usable from the simulation core,
//! the terminal front end and the headless runner alike.
//!
//! # Grid Dimensions
//!
//! The simulation runs on a fixed-size grid with hard edges. Sizes come from
//! a small set of presets:
//!
//! | Preset | Rows | Columns |
//! |--------|------|---------|
//! | startup | 30 | 50 |
//! | `Small` | 20 | 30 |
//! | `Medium` | 40 | 60 |
//! | `Large` | 60 | 80 |
//!
//! # Playback Timing
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Front-end frame interval (~60 FPS) |
//! | `FAST_INTERVAL_MS` | 100 | One generation every 100ms |
//! | `SLOW_INTERVAL_MS` | 1000 | One generation per second |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{GridPreset, LifeAction, SpeedPreset};
//!
//! let preset = GridPreset::from_str("medium").unwrap();
//! assert_eq!(preset.dimensions(), (40, 60));
//!
//! assert_eq!(SpeedPreset::Slow.interval_ms(), 1000);
//!
//! let action = LifeAction::from_str("randomize").unwrap();
//! assert_eq!(action, LifeAction::Randomize);
//! ```

/// Rows of the grid created at startup
pub const DEFAULT_ROWS: usize = 30;

/// Columns of the grid created at startup
pub const DEFAULT_COLUMNS: usize = 50;

/// Front-end frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Playback interval of the "fast" speed preset
pub const FAST_INTERVAL_MS: u32 = 100;

/// Playback interval of the "slow" speed preset
pub const SLOW_INTERVAL_MS: u32 = 1000;

/// Playback interval used when nothing else is configured
pub const DEFAULT_INTERVAL_MS: u32 = FAST_INTERVAL_MS;

/// Probability that a cell comes out live when the grid is randomized
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Seed used by stores that were not given one explicitly
pub const DEFAULT_SEED: u32 = 1;

/// Upper bound on generations a single front-end tick may catch up on.
///
/// Keeps a stalled loop (suspended terminal, slow frame) from replaying a
/// burst of generations all at once.
pub const MAX_CATCH_UP_GENERATIONS: u32 = 4;


/// A `(row, column)` position on the grid.
///
/// Rows grow downwards, columns grow to the right. Whether a coordinate is
/// valid depends on the grid it is used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Fixed grid sizes offered by the front end
///
/// - **Small**: 20 rows x 30 columns
/// - **Medium**: 40 rows x 60 columns
/// - **Large**: 60 rows x 80 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridPreset {
    Small,
    Medium,
    Large,
}

impl GridPreset {
    pub const ALL: [GridPreset; 3] = [GridPreset::Small, GridPreset::Medium, GridPreset::Large];

    /// `(rows, columns)` for this preset
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            GridPreset::Small => (20, 30),
            GridPreset::Medium => (40, 60),
            GridPreset::Large => (60, 80),
        }
    }

    /// Parse preset from string
    ///
    /// Accepts full names, single letters or the menu digits (case-insensitive):
    /// "small" | "s" | "1", "medium" | "m" | "2", "large" | "l" | "3"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::GridPreset;
    ///
    /// assert_eq!(GridPreset::from_str("S"), Some(GridPreset::Small));
    /// assert_eq!(GridPreset::from_str("2"), Some(GridPreset::Medium));
    /// assert_eq!(GridPreset::from_str("huge"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" | "s" | "1" => Some(GridPreset::Small),
            "medium" | "m" | "2" => Some(GridPreset::Medium),
            "large" | "l" | "3" => Some(GridPreset::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GridPreset::Small => "small",
            GridPreset::Medium => "medium",
            GridPreset::Large => "large",
        }
    }
}

/// Playback speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedPreset {
    Fast,
    Slow,
}

impl SpeedPreset {
    /// Milliseconds between generations
    pub fn interval_ms(&self) -> u32 {
        match self {
            SpeedPreset::Fast => FAST_INTERVAL_MS,
            SpeedPreset::Slow => SLOW_INTERVAL_MS,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Some(SpeedPreset::Fast),
            "slow" => Some(SpeedPreset::Slow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreset::Fast => "fast",
            SpeedPreset::Slow => "slow",
        }
    }
}

/// User-level commands understood by the simulation session
///
/// Keyboard input, mouse input and scripted drivers all funnel into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeAction {
    /// Begin automatic playback
    Start,
    /// Halt automatic playback
    Stop,
    /// Start when stopped, stop when running
    TogglePlay,
    /// Advance exactly one generation
    Step,
    /// Refill the grid with random cells
    Randomize,
    /// Kill every cell and reset the generation counter
    Clear,
    /// Switch to the fast speed preset (and keep playing)
    Fast,
    /// Switch to the slow speed preset (and keep playing)
    Slow,
    /// Rebuild the grid at a preset size
    Resize(GridPreset),
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Flip the cell under the cursor
    ToggleCursor,
}

impl LifeAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::{GridPreset, LifeAction};
    ///
    /// assert_eq!(LifeAction::from_str("togglePlay"), Some(LifeAction::TogglePlay));
    /// assert_eq!(LifeAction::from_str("resizeLarge"), Some(LifeAction::Resize(GridPreset::Large)));
    /// assert_eq!(LifeAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(LifeAction::Start),
            "stop" => Some(LifeAction::Stop),
            "toggleplay" => Some(LifeAction::TogglePlay),
            "step" => Some(LifeAction::Step),
            "randomize" => Some(LifeAction::Randomize),
            "clear" => Some(LifeAction::Clear),
            "fast" => Some(LifeAction::Fast),
            "slow" => Some(LifeAction::Slow),
            "resizesmall" => Some(LifeAction::Resize(GridPreset::Small)),
            "resizemedium" => Some(LifeAction::Resize(GridPreset::Medium)),
            "resizelarge" => Some(LifeAction::Resize(GridPreset::Large)),
            "cursorup" => Some(LifeAction::CursorUp),
            "cursordown" => Some(LifeAction::CursorDown),
            "cursorleft" => Some(LifeAction::CursorLeft),
            "cursorright" => Some(LifeAction::CursorRight),
            "togglecursor" => Some(LifeAction::ToggleCursor),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeAction::Start => "start",
            LifeAction::Stop => "stop",
            LifeAction::TogglePlay => "togglePlay",
            LifeAction::Step => "step",
            LifeAction::Randomize => "randomize",
            LifeAction::Clear => "clear",
            LifeAction::Fast => "fast",
            LifeAction::Slow => "slow",
            LifeAction::Resize(GridPreset::Small) => "resizeSmall",
            LifeAction::Resize(GridPreset::Medium) => "resizeMedium",
            LifeAction::Resize(GridPreset::Large) => "resizeLarge",
            LifeAction::CursorUp => "cursorUp",
            LifeAction::CursorDown => "cursorDown",
            LifeAction::CursorLeft => "cursorLeft",
            LifeAction::CursorRight => "cursorRight",
            LifeAction::ToggleCursor => "toggleCursor",
        }
    }
}
