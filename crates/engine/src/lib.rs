//! Simulation drivers - everything that decides *when* the grid advances
//!
//! The core crate knows how to compute a generation; this crate decides when
//! to do it and funnels user edits into the store:
//!
//! - [`config`]: `LIFE_*` environment configuration ([`LifeConfig`])
//! - [`playback`]: fixed-timestep cadence ([`Playback`]) for frame-driven loops
//! - [`session`]: single-threaded owner of store + playback + edit cursor ([`Session`])
//! - [`shared`]: `Arc<RwLock<GridStore>>` handle with atomic advances
//!   and an async playback task for multi-task embeddings
//!
//! # Example
//!
//! ```
//! use tui_life_engine::{LifeConfig, Session};
//! use tui_life_engine::types::LifeAction;
//!
//! let mut session = Session::new(&LifeConfig::default(), 42).unwrap();
//! session.apply_action(LifeAction::Randomize);
//! session.apply_action(LifeAction::Start);
//!
//! // Two 100ms intervals worth of frames
//! let advanced: u32 = (0..13).map(|_| session.tick(16)).sum();
//! assert_eq!(advanced, 2);
//! assert_eq!(session.status().generation, 2);
//! ```

pub mod config;
pub mod error;
pub mod playback;
pub mod session;
pub mod shared;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use config::{ConfigError, LifeConfig};
pub use error::EngineError;
pub use playback::Playback;
pub use session::{Session, SessionStatus};
pub use shared::{spawn_playback, SharedStore};
