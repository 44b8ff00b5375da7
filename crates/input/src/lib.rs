//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Intent`] values. The game
//! is turn-based, so every key press is exactly one intent; there is no
//! auto-repeat handling and key releases are ignored.

pub mod map;

pub use holy_diver_types as types;

pub use map::{handle_key_event, should_quit};
