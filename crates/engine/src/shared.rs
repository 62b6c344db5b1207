//! Shared store handle for concurrent drivers
//!
//! Wraps a [`GridStore`] in `Arc<RwLock<_>>` so an async playback task and
//! other tasks (input, network, UI) can operate on the same simulation.
//!
//! [`SharedStore::advance`] holds the write lock from computing the next
//! generation until it is installed, so no toggle, resize or clear can land
//! in the middle of a step. A mutator queued behind it applies to the new
//! generation.
//!
//! Callers that want to compute off the write lock use the two-phase
//! [`SharedStore::prepare`] / [`SharedStore::commit`] pair instead. The commit
//! is rejected with [`GridError::StaleAdvance`] if anything changed the store
//! in between, so a stale result can never overwrite a freshly resized grid.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, trace};

use crate::core::{Grid, GridError, GridStore, PendingAdvance};
use crate::error::EngineError;

/// Cloneable handle to a store shared between tasks
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<GridStore>>,
}

impl SharedStore {
    pub fn new(store: GridStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run `f` with shared access to the store.
    pub async fn read<R>(&self, f: impl FnOnce(&GridStore) -> R) -> R {
        let guard = self.inner.read().await;
        f(&guard)
    }

    /// Run `f` with exclusive access to the store.
    pub async fn write<R>(&self, f: impl FnOnce(&mut GridStore) -> R) -> R {
        let mut guard = self.inner.write().await;
        f(&mut guard)
    }

    pub async fn snapshot(&self) -> Grid {
        self.read(|s| s.snapshot()).await
    }

    pub async fn generation(&self) -> u64 {
        self.read(|s| s.generation()).await
    }

    pub async fn dimensions(&self) -> (usize, usize) {
        self.read(|s| s.dimensions()).await
    }

    pub async fn get_cell(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.read(|s| s.get_cell(row, col)).await
    }

    pub async fn toggle(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.write(|s| s.toggle(row, col)).await
    }

    pub async fn randomize(&self, density: f64) {
        self.write(|s| s.randomize(density)).await
    }

    pub async fn resize(&self, rows: usize, columns: usize) -> Result<(), GridError> {
        self.write(|s| s.resize(rows, columns)).await
    }

    pub async fn clear(&self) {
        self.write(|s| s.clear()).await
    }

    /// Compute the next generation under a read lock, without installing it.
    pub async fn prepare(&self) -> PendingAdvance {
        self.read(|s| s.prepare()).await
    }

    /// Install a prepared generation if the store has not moved on.
    pub async fn commit(&self, pending: PendingAdvance) -> Result<u64, GridError> {
        self.write(|s| s.commit(pending)).await
    }

    /// Step one generation atomically and return the new generation number.
    pub async fn advance(&self) -> u64 {
        self.write(|s| s.advance()).await
    }
}

/// Advance `store` every `interval_ms` until `shutdown` flips to `true` or its
/// sender is dropped.
///
/// The first generation fires one full interval after the call. The task
/// resolves to the number of generations it advanced.
pub fn spawn_playback(
    store: SharedStore,
    interval_ms: u32,
    mut shutdown: watch::Receiver<bool>,
) -> Result<JoinHandle<u64>, EngineError> {
    if interval_ms == 0 {
        return Err(EngineError::ZeroInterval);
    }
    let period = Duration::from_millis(interval_ms as u64);

    Ok(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately.
        ticker.tick().await;

        info!(interval_ms, "async playback started");
        let mut committed = 0u64;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let generation = store.advance().await;
                    committed += 1;
                    trace!(generation, "playback advanced");
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        info!(committed, "async playback stopped");
        committed
    }))
}
