//! Player - position and the three depleting resources
//!
//! Every mutation clamps into `[0, max]`, so health, oxygen and battery can
//! never go negative or exceed their ceiling.

use crate::types::{
    DeathCause, Pos, ILLUMINATE_BATTERY_COST, INITIAL_LIVES, MAX_BATTERY, MAX_HEALTH, MAX_OXYGEN,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pos: Pos,
    health: u32,
    oxygen: u32,
    battery: u32,
    lives: u32,
}

impl Player {
    /// Fresh player at `pos` with every resource full
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            health: MAX_HEALTH,
            oxygen: MAX_OXYGEN,
            battery: MAX_BATTERY,
            lives: INITIAL_LIVES,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn oxygen(&self) -> u32 {
        self.oxygen
    }

    pub fn battery(&self) -> u32 {
        self.battery
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub(crate) fn set_pos(&mut self, pos: Pos) {
        self.pos = pos;
    }

    pub fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn consume_oxygen(&mut self, amount: u32) {
        self.oxygen = self.oxygen.saturating_sub(amount);
    }

    pub fn add_oxygen(&mut self, amount: u32) {
        self.oxygen = self.oxygen.saturating_add(amount).min(MAX_OXYGEN);
    }

    /// Spend `cost` battery. Fails without side effects if the charge is short.
    pub fn use_battery(&mut self, cost: u32) -> bool {
        if self.battery < cost {
            return false;
        }
        self.battery -= cost;
        true
    }

    /// Spend the standard illumination cost
    pub fn use_lamp(&mut self) -> bool {
        self.use_battery(ILLUMINATE_BATTERY_COST)
    }

    pub fn recharge_battery(&mut self, amount: u32) {
        self.battery = self.battery.saturating_add(amount).min(MAX_BATTERY);
    }

    /// The sole game-over predicate
    pub fn is_dead(&self) -> bool {
        self.health == 0 || self.oxygen == 0
    }

    /// Which resource ran out. Health wins when both are empty.
    pub fn death_cause(&self) -> Option<DeathCause> {
        if self.health == 0 {
            Some(DeathCause::Health)
        } else if self.oxygen == 0 {
            Some(DeathCause::Oxygen)
        } else {
            None
        }
    }
}
