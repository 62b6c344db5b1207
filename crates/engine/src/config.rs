//! Runtime configuration from environment variables
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `LIFE_INTERVAL_MS` | milliseconds between generations (positive) | 100 |
//! | `LIFE_PRESET` | `small`/`medium`/`large` (or `1`/`2`/`3`) | startup 30x50 grid |
//! | `LIFE_DENSITY` | live probability used by randomize, `0..=1` | 0.5 |
//! | `LIFE_SEED` | RNG seed (`u32`) | derived from the clock |
//! | `LIFE_LOG_PATH` | file that receives tracing output | logging off |
//!
//! Malformed values are reported, never replaced with defaults behind the
//! user's back.

use std::env;

use thiserror::Error;
use tracing::debug;

use crate::types::{GridPreset, DEFAULT_COLUMNS, DEFAULT_DENSITY, DEFAULT_INTERVAL_MS, DEFAULT_ROWS};

pub const ENV_INTERVAL_MS: &str = "LIFE_INTERVAL_MS";
pub const ENV_PRESET: &str = "LIFE_PRESET";
pub const ENV_DENSITY: &str = "LIFE_DENSITY";
pub const ENV_SEED: &str = "LIFE_SEED";
pub const ENV_LOG_PATH: &str = "LIFE_LOG_PATH";

/// Errors from parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: playback interval must be a positive integer of milliseconds, got {value:?}")]
    InvalidInterval { var: &'static str, value: String },

    #[error("{var}: unknown grid preset {value:?} (expected small, medium or large)")]
    UnknownPreset { var: &'static str, value: String },

    #[error("{var}: density must be a number between 0 and 1, got {value:?}")]
    InvalidDensity { var: &'static str, value: String },

    #[error("{var}: seed must be an unsigned 32-bit integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
}

/// Simulation front-end configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub interval_ms: u32,
    /// `None` keeps the 30x50 startup grid
    pub preset: Option<GridPreset>,
    pub density: f64,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            preset: None,
            density: DEFAULT_DENSITY,
            seed: None,
            log_path: None,
        }
    }
}

impl LifeConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Empty or whitespace-only values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();

        if let Some(value) = get(ENV_INTERVAL_MS) {
            config.interval_ms = parse_interval_ms(&value).ok_or(ConfigError::InvalidInterval {
                var: ENV_INTERVAL_MS,
                value,
            })?;
        }

        if let Some(value) = get(ENV_PRESET) {
            config.preset = Some(GridPreset::from_str(&value).ok_or(
                ConfigError::UnknownPreset {
                    var: ENV_PRESET,
                    value,
                },
            )?);
        }

        if let Some(value) = get(ENV_DENSITY) {
            config.density = parse_density(&value).ok_or(ConfigError::InvalidDensity {
                var: ENV_DENSITY,
                value,
            })?;
        }

        if let Some(value) = get(ENV_SEED) {
            config.seed = Some(value.parse::<u32>().map_err(|_| ConfigError::InvalidSeed {
                var: ENV_SEED,
                value: value.clone(),
            })?);
        }

        config.log_path = get(ENV_LOG_PATH);

        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// `(rows, columns)` of the grid to start with
    pub fn dimensions(&self) -> (usize, usize) {
        self.preset
            .map(|p| p.dimensions())
            .unwrap_or((DEFAULT_ROWS, DEFAULT_COLUMNS))
    }

    /// Configured seed, or `fallback` when none was given
    pub fn seed_or(&self, fallback: u32) -> u32 {
        self.seed.unwrap_or(fallback)
    }
}

/// Parse a playback interval; only positive integers are accepted.
pub fn parse_interval_ms(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|&ms| ms > 0)
}

/// Parse a density in `[0, 1]`.
pub fn parse_density(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|d| (0.0..=1.0).contains(d))
}
