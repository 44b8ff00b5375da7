//! Snapshot module - the read-only view handed to presentation layers
//!
//! A `WorldSnapshot` is plain `Copy` data: one `TileView` per cell plus the
//! resource readouts. It can be refilled in place every frame.

use crate::types::{
    CollectibleKind, DeathCause, EnemyKind, Pos, MAP_HEIGHT, MAP_WIDTH, MAX_BATTERY, MAX_HEALTH,
    MAX_OXYGEN,
};

/// What a presentation layer should draw in one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileView {
    /// Not yet revealed
    #[default]
    Dark,
    Player,
    Enemy(EnemyKind),
    Collectible(CollectibleKind),
    Open,
    Wall,
}

impl TileView {
    /// Single-character rendering used by the plain-text views
    pub fn symbol(self) -> char {
        match self {
            TileView::Dark => ' ',
            TileView::Player => 'P',
            TileView::Enemy(_) => 'M',
            TileView::Collectible(kind) => kind.symbol(),
            TileView::Open => 'o',
            TileView::Wall => 'x',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldSnapshot {
    pub tiles: [[TileView; MAP_WIDTH as usize]; MAP_HEIGHT as usize],
    pub player: Pos,
    pub health: u32,
    pub oxygen: u32,
    pub battery: u32,
    pub lives: u32,
    pub score: u32,
    pub turn: u32,
    pub episode_id: u32,
    pub collectibles_left: u32,
    pub game_over: bool,
    pub death_cause: Option<DeathCause>,
}

impl WorldSnapshot {
    pub fn clear(&mut self) {
        self.tiles = [[TileView::Dark; MAP_WIDTH as usize]; MAP_HEIGHT as usize];
        self.player = Pos::default();
        self.health = MAX_HEALTH;
        self.oxygen = MAX_OXYGEN;
        self.battery = MAX_BATTERY;
        self.lives = 0;
        self.score = 0;
        self.turn = 0;
        self.episode_id = 0;
        self.collectibles_left = 0;
        self.game_over = false;
        self.death_cause = None;
    }

    pub fn tile(&self, pos: Pos) -> Option<TileView> {
        if !pos.in_bounds() {
            return None;
        }
        Some(self.tiles[pos.y as usize][pos.x as usize])
    }

    /// Row `y` as a string of [`TileView::symbol`] characters
    pub fn row_string(&self, y: usize) -> String {
        self.tiles
            .get(y)
            .map(|row| row.iter().map(|t| t.symbol()).collect())
            .unwrap_or_default()
    }
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        let mut s = Self {
            tiles: [[TileView::Dark; MAP_WIDTH as usize]; MAP_HEIGHT as usize],
            player: Pos::default(),
            health: 0,
            oxygen: 0,
            battery: 0,
            lives: 0,
            score: 0,
            turn: 0,
            episode_id: 0,
            collectibles_left: 0,
            game_over: false,
            death_cause: None,
        };
        s.clear();
        s
    }
}
