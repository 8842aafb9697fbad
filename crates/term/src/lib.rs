//! Terminal renderer for the stacker engine.
//!
//! Renders into a plain framebuffer of styled glyphs instead of using a widget
//! toolkit, then flushes only what changed between frames.
//!
//! - [`fb`]: glyphs, styles and the framebuffer
//! - [`game_view`]: snapshot to framebuffer layout (pure, testable)
//! - [`renderer`]: crossterm output with diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use stacker_core as core;
pub use stacker_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
