//! Terminal presentation layer.
//!
//! Renders a [`core::WorldSnapshot`] into a simple framebuffer and flushes it
//! to the terminal with crossterm. Nothing here feeds back into the
//! simulation: the view only reads snapshots.
//!
//! - `game_view` is pure and unit-tested
//! - `renderer` owns raw mode, the alternate screen and diff flushing
//! - tiles are drawn 2 columns wide to keep the map roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use holy_diver_core as core;
pub use holy_diver_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
