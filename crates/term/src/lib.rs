//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a session snapshot
//! into a framebuffer, and the renderer flushes changed cells to a terminal.
//! No widget or layout library is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tap_match_core as core;
pub use tap_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, ViewState, Viewport, MAX_CELL_W};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
