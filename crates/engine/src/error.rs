//! Engine-level errors.

use thiserror::Error;

use crate::config::ConfigError;
use crate::core::GridError;

/// Errors from building or driving a simulation session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Playback cadence of zero milliseconds.
    #[error("playback interval must be a positive number of milliseconds")]
    ZeroInterval,

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
