//! Holy Diver (workspace facade crate).
//!
//! Re-exports the workspace crates as `holy_diver::{core,input,term,types}` and
//! hosts the line-oriented [`headless`] driver shared by the binary and tests.

pub mod headless;

pub use holy_diver_core as core;
pub use holy_diver_input as input;
pub use holy_diver_term as term;
pub use holy_diver_types as types;
