//! World module - owns every piece of mutable state and runs the turn cycle
//!
//! One call to [`World::step`] is one turn:
//!
//! 1. Resolve the player's action, including its resource cost and any
//!    immediate bump into an enemy.
//! 2. Run the enemy tick: for each enemy in spawn order, apply the
//!    proximity activation rule, let it move if active, then check whether
//!    it now shares the player's tile.
//! 3. Evaluate game over.
//!
//! Once the player is dead the world is frozen until [`World::reset`].

use std::path::Path;

use rand::Rng;

use crate::collectibles::Collectibles;
use crate::enemy::Enemy;
use crate::grid::Grid;
use crate::layout::{Layout, LayoutSource};
use crate::player::Player;
use crate::rng::{seeded, GameRng};
use crate::snapshot::{TileView, WorldSnapshot};
use crate::types::*;
use crate::visibility::Visibility;

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player moved; carries the item picked up on arrival, if any
    Moved { collected: Option<CollectibleKind> },
    /// Wall or map edge. Oxygen was still paid.
    Blocked,
    /// An enemy holds the target tile; the player took its damage and stayed put
    Bumped { damage: u32 },
    /// The game is over
    Ignored,
}

/// Result of an illumination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IlluminateOutcome {
    /// Tile lit; `enemies` is the number of enemies exposed on it
    Lit { enemies: u32 },
    /// Battery below the lamp cost; nothing happened
    NoBattery,
    /// Target is off the map; nothing happened
    OutOfBounds,
    /// The game is over
    Ignored,
}

/// What the enemy phase of a turn did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Enemies that turned active this tick
    pub activated: u32,
    /// Enemies whose position changed
    pub moved: u32,
    /// Enemies that ended the tick on the player's tile
    pub hits: u32,
    /// Total damage dealt by those hits
    pub damage: u32,
}

/// What the player's action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Move(MoveOutcome),
    Illuminate(IlluminateOutcome),
    Reset,
    Quit,
    /// The game is over and the intent cannot act
    Ignored,
}

/// Full account of one [`World::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub intent: Intent,
    pub action: ActionOutcome,
    /// `None` when no enemy tick ran (reset, quit, or game already over)
    pub tick: Option<TickReport>,
    /// The game ended during this step
    pub ended: Option<DeathCause>,
}

impl StepReport {
    pub fn quit(&self) -> bool {
        matches!(self.action, ActionOutcome::Quit)
    }
}

/// A single game instance
#[derive(Debug, Clone)]
pub struct World<R = GameRng> {
    grid: Grid,
    start: Pos,
    source: LayoutSource,
    player: Player,
    enemies: Vec<Enemy>,
    collectibles: Collectibles,
    visibility: Visibility,
    score: u32,
    /// Enemy ticks since the last reset
    turn: u32,
    /// Monotonic episode id (increments on reset)
    episode_id: u32,
    rng: R,
}

impl World<GameRng> {
    /// Generated world driven by a seeded generator
    pub fn generated(seed: u64) -> Self {
        let mut rng = seeded(seed);
        let layout = Layout::generate(&mut rng);
        Self::new(layout, rng)
    }

    /// World from a map file, falling back to a generated map
    pub fn load(path: Option<&Path>, seed: u64) -> Self {
        let mut rng = seeded(seed);
        let layout = Layout::load(path, &mut rng);
        Self::new(layout, rng)
    }
}

impl<R: Rng> World<R> {
    /// Build a world from a layout, taking ownership of the random source
    pub fn new(layout: Layout, rng: R) -> Self {
        let source = layout.source();
        let Layout {
            grid,
            start,
            enemies,
            mut collectibles,
            ..
        } = layout;
        collectibles.reset();

        let mut world = Self {
            grid,
            start,
            source,
            player: Player::new(start),
            enemies,
            collectibles,
            visibility: Visibility::new(),
            score: 0,
            turn: 0,
            episode_id: 0,
            rng,
        };
        for enemy in &mut world.enemies {
            enemy.reset();
        }
        world.visibility.reveal(start);
        world
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn collectibles(&self) -> &Collectibles {
        &self.collectibles
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn source(&self) -> LayoutSource {
        self.source
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn is_over(&self) -> bool {
        self.player.is_dead()
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.player.death_cause()
    }

    /// First enemy standing on `pos`
    pub fn enemy_at(&self, pos: Pos) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.pos() == pos)
    }

    /// Attempt to move the player one tile.
    pub fn request_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.is_over() {
            return MoveOutcome::Ignored;
        }

        let target = self.player.pos().step(dir);
        if !self.grid.is_open(target) {
            self.player.consume_oxygen(MOVE_OXYGEN_COST);
            return MoveOutcome::Blocked;
        }

        if let Some(damage) = self.enemy_at(target).map(Enemy::damage) {
            self.player.apply_damage(damage);
            return MoveOutcome::Bumped { damage };
        }

        self.player.set_pos(target);
        self.player.consume_oxygen(MOVE_OXYGEN_COST);
        self.visibility.reveal(target);

        let collected = self.collectibles.collect_at(target);
        if let Some(kind) = collected {
            self.apply_pickup(kind);
        }
        MoveOutcome::Moved { collected }
    }

    fn apply_pickup(&mut self, kind: CollectibleKind) {
        match kind {
            CollectibleKind::Coin => {}
            CollectibleKind::BatteryPack => self.player.recharge_battery(BATTERY_PACK_CHARGE),
            CollectibleKind::OxygenTank => self.player.add_oxygen(OXYGEN_TANK_AMOUNT),
        }
        self.score += kind.score();
        log::debug!("picked up {:?}, score {}", kind, self.score);
    }

    /// Spend battery to light the adjacent tile in `dir`.
    pub fn illuminate(&mut self, dir: Direction) -> IlluminateOutcome {
        if self.is_over() {
            return IlluminateOutcome::Ignored;
        }

        let target = self.player.pos().step(dir);
        if !target.in_bounds() {
            return IlluminateOutcome::OutOfBounds;
        }
        if !self.player.use_lamp() {
            return IlluminateOutcome::NoBattery;
        }

        self.visibility.reveal(target);
        let mut enemies = 0;
        for enemy in self.enemies.iter_mut().filter(|e| e.pos() == target) {
            if enemy.activate() {
                log::debug!("lamp exposed {:?} enemy at {:?}", enemy.kind(), target);
            }
            enemies += 1;
        }
        IlluminateOutcome::Lit { enemies }
    }

    /// Enemy phase of a turn.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if self.is_over() {
            return report;
        }
        self.turn = self.turn.wrapping_add(1);

        let player_pos = self.player.pos();
        for enemy in self.enemies.iter_mut() {
            let pos = enemy.pos();
            if pos.chebyshev(player_pos) <= DETECTION_RADIUS
                && self.visibility.is_visible(pos)
                && enemy.activate()
            {
                log::debug!("{:?} enemy at {:?} spotted the diver", enemy.kind(), pos);
                report.activated += 1;
            }

            if enemy.is_active() && enemy.step(&self.grid, &mut self.rng) {
                report.moved += 1;
            }

            if enemy.pos() == player_pos {
                self.player.apply_damage(enemy.damage());
                report.hits += 1;
                report.damage += enemy.damage();
            }
        }
        report
    }

    /// Run one full turn for `intent`.
    pub fn step(&mut self, intent: Intent) -> StepReport {
        let was_over = self.is_over();

        let action = match intent {
            Intent::Reset => {
                self.reset();
                return StepReport {
                    intent,
                    action: ActionOutcome::Reset,
                    tick: None,
                    ended: None,
                };
            }
            Intent::Quit => ActionOutcome::Quit,
            _ if was_over => ActionOutcome::Ignored,
            Intent::Move(dir) => ActionOutcome::Move(self.request_move(dir)),
            Intent::Illuminate(dir) => ActionOutcome::Illuminate(self.illuminate(dir)),
        };

        let tick = match action {
            ActionOutcome::Move(_) | ActionOutcome::Illuminate(_) => Some(self.tick()),
            _ => None,
        };

        let ended = if !was_over && self.is_over() {
            let cause = self.death_cause();
            log::info!(
                "game over after {} turns: {:?}, score {}",
                self.turn,
                cause,
                self.score
            );
            cause
        } else {
            None
        };

        StepReport {
            intent,
            action,
            tick,
            ended,
        }
    }

    /// Return to the initial configuration without rebuilding the terrain.
    pub fn reset(&mut self) {
        self.player = Player::new(self.start);
        for enemy in &mut self.enemies {
            enemy.reset();
        }
        self.collectibles.reset();
        self.visibility.clear();
        self.visibility.reveal(self.start);
        self.score = 0;
        self.turn = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        log::info!("world reset, episode {}", self.episode_id);
    }

    /// What a renderer should draw at `pos`
    pub fn tile_view(&self, pos: Pos) -> TileView {
        if pos == self.player.pos() {
            return TileView::Player;
        }
        if !self.visibility.is_visible(pos) {
            return TileView::Dark;
        }
        if let Some(enemy) = self.enemies.iter().find(|e| e.pos() == pos && e.is_visible()) {
            return TileView::Enemy(enemy.kind());
        }
        if let Some(kind) = self.collectibles.uncollected_at(pos) {
            return TileView::Collectible(kind);
        }
        match self.grid.classify(pos) {
            Some(Terrain::Wall) => TileView::Wall,
            Some(Terrain::Open) => TileView::Open,
            None => TileView::Dark,
        }
    }

    pub fn snapshot_into(&self, out: &mut WorldSnapshot) {
        for (y, row) in out.tiles.iter_mut().enumerate() {
            for (x, tile) in row.iter_mut().enumerate() {
                *tile = self.tile_view(Pos::new(x as i16, y as i16));
            }
        }
        out.player = self.player.pos();
        out.health = self.player.health();
        out.oxygen = self.player.oxygen();
        out.battery = self.player.battery();
        out.lives = self.player.lives();
        out.score = self.score;
        out.turn = self.turn;
        out.episode_id = self.episode_id;
        out.game_over = self.is_over();
        out.death_cause = self.death_cause();
        out.collectibles_left = self.collectibles.remaining() as u32;
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let mut s = WorldSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
