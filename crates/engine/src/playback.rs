//! Playback cadence for a fixed-timestep loop
//!
//! `Playback` does not own a timer. The caller feeds it elapsed milliseconds
//! every frame and it answers how many generations are due. Stopping or
//! changing the interval discards the partially elapsed interval, so the
//! change is in effect before the next generation fires.

use tracing::debug;

use crate::error::EngineError;
use crate::types::{SpeedPreset, MAX_CATCH_UP_GENERATIONS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    running: bool,
    interval_ms: u32,
    /// Time accumulated toward the next generation
    elapsed_ms: u32,
}

impl Playback {
    /// Create a stopped playback with the given interval.
    pub fn new(interval_ms: u32) -> Result<Self, EngineError> {
        if interval_ms == 0 {
            return Err(EngineError::ZeroInterval);
        }
        Ok(Self {
            running: false,
            interval_ms,
            elapsed_ms: 0,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// The speed preset matching the current interval, if any
    pub fn speed(&self) -> Option<SpeedPreset> {
        [SpeedPreset::Fast, SpeedPreset::Slow]
            .into_iter()
            .find(|s| s.interval_ms() == self.interval_ms)
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.elapsed_ms = 0;
        debug!(interval_ms = self.interval_ms, "playback started");
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.elapsed_ms = 0;
        debug!("playback stopped");
    }

    /// Start when stopped, stop when running. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Change the cadence. A zero interval is rejected and nothing changes.
    pub fn set_interval_ms(&mut self, interval_ms: u32) -> Result<(), EngineError> {
        if interval_ms == 0 {
            return Err(EngineError::ZeroInterval);
        }
        self.interval_ms = interval_ms;
        self.elapsed_ms = 0;
        debug!(interval_ms, "playback interval changed");
        Ok(())
    }

    /// Switch to a speed preset and (re)start playback.
    pub fn set_speed(&mut self, speed: SpeedPreset) {
        self.interval_ms = speed.interval_ms();
        self.elapsed_ms = 0;
        self.running = true;
        debug!(speed = speed.as_str(), "playback speed selected");
    }

    /// Discard the partially elapsed interval.
    ///
    /// Used after the grid is replaced so the fresh grid gets a full interval
    /// on screen before it first advances.
    pub fn restart_interval(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Feed elapsed time; returns how many generations are due now.
    ///
    /// Never more than [`MAX_CATCH_UP_GENERATIONS`] at once; time beyond that
    /// is dropped.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / self.interval_ms;
        if due > MAX_CATCH_UP_GENERATIONS {
            self.elapsed_ms = 0;
            return MAX_CATCH_UP_GENERATIONS;
        }
        self.elapsed_ms %= self.interval_ms;
        due
    }
}
