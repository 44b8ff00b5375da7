//! Enemies - a single tagged struct covering both variants
//!
//! All enemies live in one contiguous `Vec` owned by the world. The variant
//! only selects the movement behaviour and damage; activation is decided by
//! the world, never by the enemy itself.

use rand::Rng;

use crate::grid::Grid;
use crate::types::{Direction, EnemyKind, Pos, MOVING_SKIP_DENOMINATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    kind: EnemyKind,
    pos: Pos,
    /// Where the enemy was placed by the layout; restored on reset.
    spawn: Pos,
    active: bool,
    visible: bool,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Pos) -> Self {
        Self {
            kind,
            pos,
            spawn: pos,
            active: false,
            visible: false,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn spawn(&self) -> Pos {
        self.spawn
    }

    pub fn damage(&self) -> u32 {
        self.kind.damage()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Make the enemy visible and AI-responsive. One-way until reset.
    ///
    /// Returns true if the enemy was dormant before.
    pub(crate) fn activate(&mut self) -> bool {
        let was_active = self.active;
        self.active = true;
        self.visible = true;
        !was_active
    }

    /// Back to the spawn tile, dormant and hidden
    pub(crate) fn reset(&mut self) {
        self.pos = self.spawn;
        self.active = false;
        self.visible = false;
    }

    /// Advance one tick. Returns true if the position changed.
    ///
    /// Dormant enemies and stationary enemies never move.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) -> bool {
        if !self.active {
            return false;
        }
        match self.kind {
            EnemyKind::Stationary => false,
            EnemyKind::Moving => {
                let choice = walk_choice(rng);
                self.walk(grid, choice)
            }
        }
    }

    /// Take the chosen step if the destination is open water.
    fn walk(&mut self, grid: &Grid, choice: Option<Direction>) -> bool {
        let Some(dir) = choice else {
            return false;
        };
        let target = self.pos.step(dir);
        if grid.is_open(target) {
            self.pos = target;
            true
        } else {
            false
        }
    }
}

/// Random-walk decision for one tick: skip with probability 1/3, otherwise a
/// uniformly random cardinal direction.
pub fn walk_choice<R: Rng + ?Sized>(rng: &mut R) -> Option<Direction> {
    if rng.gen_range(0..MOVING_SKIP_DENOMINATOR) == 0 {
        return None;
    }
    Some(Direction::ALL[rng.gen_range(0..Direction::ALL.len())])
}
