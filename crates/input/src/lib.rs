//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::LifeAction`]s
//! and screen positions. It knows nothing about grid layout: turning a click
//! position into a cell is the view's job.

pub mod map;

pub use tui_life_types as types;

pub use map::{handle_key_event, mouse_click, should_quit};
