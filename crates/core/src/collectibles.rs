//! Collectibles registry - one-shot pickups layered on the grid
//!
//! Items are never removed from storage; they are flagged collected so the
//! layout can be restored by clearing the flags.

use crate::types::{CollectibleKind, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collectible {
    pub pos: Pos,
    pub kind: CollectibleKind,
    pub collected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collectibles {
    items: Vec<Collectible>,
}

impl Collectibles {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Place an item. Returns false if an item already sits on `pos`.
    pub fn place(&mut self, pos: Pos, kind: CollectibleKind) -> bool {
        if self.is_occupied(pos) {
            return false;
        }
        self.items.push(Collectible {
            pos,
            kind,
            collected: false,
        });
        true
    }

    /// Pick up whatever uncollected item lies on `pos`.
    ///
    /// Applying the effect is the caller's job.
    pub fn collect_at(&mut self, pos: Pos) -> Option<CollectibleKind> {
        let item = self
            .items
            .iter_mut()
            .find(|c| !c.collected && c.pos == pos)?;
        item.collected = true;
        Some(item.kind)
    }

    /// The uncollected item on `pos`, if any
    pub fn uncollected_at(&self, pos: Pos) -> Option<CollectibleKind> {
        self.items
            .iter()
            .find(|c| !c.collected && c.pos == pos)
            .map(|c| c.kind)
    }

    /// Any item on `pos`, collected or not
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.items.iter().any(|c| c.pos == pos)
    }

    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.collected = false;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collectible> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|c| !c.collected).count()
    }
}
