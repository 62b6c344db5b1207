//! Terminal rendering for the Life grid.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer and the renderer flushes only what changed. No widget or
//! layout library sits in between, which keeps control over the 2:1 cell
//! aspect ratio and keeps the view logic testable without a terminal.

pub mod fb;
pub mod life_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use life_view::{AnchorY, GridLayout, HudStatus, LifeView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
