//! Frame pacing for the terminal loop.
//!
//! While the simulation runs every frame may carry a new generation, so
//! nothing is skipped. While it is stopped the screen only changes on edits;
//! redraws then happen on fingerprint change or at a low idle cadence.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to draw a frame at `now_ms`.
    ///
    /// `fingerprint` identifies the visible state (grid plus status).
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, running: bool) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let idle_due = now_ms.saturating_sub(self.last_render_ms) >= self.idle_interval_ms;

        if running || changed || idle_due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    /// Make the next call render regardless of state (terminal resize).
    pub fn force(&mut self) {
        self.last_fingerprint = None;
    }
}
