//! Visibility map - which tiles have been revealed
//!
//! Parallel to the terrain grid. A tile only ever goes from dark to lit;
//! the whole map is cleared by [`Visibility::clear`] on world reset.

use crate::grid::{index, MAP_SIZE};
use crate::types::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    lit: [bool; MAP_SIZE],
}

impl Visibility {
    /// All tiles dark
    pub fn new() -> Self {
        Self {
            lit: [false; MAP_SIZE],
        }
    }

    /// Mark `pos` visible. Out-of-bounds positions are ignored.
    ///
    /// Returns true if the tile was dark before.
    pub fn reveal(&mut self, pos: Pos) -> bool {
        match index(pos) {
            Some(idx) => !std::mem::replace(&mut self.lit[idx], true),
            None => false,
        }
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        index(pos).is_some_and(|idx| self.lit[idx])
    }

    pub fn clear(&mut self) {
        self.lit.fill(false);
    }

    pub fn revealed_count(&self) -> usize {
        self.lit.iter().filter(|&&v| v).count()
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::new()
    }
}
