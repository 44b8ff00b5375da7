//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, headless protocol).
//!
//! # Map Dimensions
//!
//! The world is a fixed 20x20 grid:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Generated start**: (5, 5)
//!
//! # Resource Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_HEALTH` | 100 | Health ceiling and starting value |
//! | `MAX_OXYGEN` | 100 | Oxygen ceiling and starting value |
//! | `MAX_BATTERY` | 100 | Battery ceiling and starting value |
//! | `MOVE_OXYGEN_COST` | 2 | Oxygen paid for every move attempt |
//! | `ILLUMINATE_BATTERY_COST` | 5 | Battery paid for one illumination |
//! | `DETECTION_RADIUS` | 3 | Chebyshev radius of the proximity rule |
//!
//! # Pickups
//!
//! | Kind | Effect | Score |
//! |------|--------|-------|
//! | Coin | - | +50 |
//! | Battery pack | +30 battery | +20 |
//! | Oxygen tank | +40 oxygen | +20 |
//!
//! # Examples
//!
//! ```
//! use holy_diver_types::{Direction, Intent, Pos, MAP_WIDTH};
//!
//! let intent = Intent::from_str("moveLeft").unwrap();
//! assert_eq!(intent, Intent::Move(Direction::Left));
//!
//! let pos = Pos::new(5, 5).step(Direction::Left);
//! assert_eq!(pos, Pos::new(4, 5));
//!
//! assert_eq!(MAP_WIDTH, 20);
//! ```

/// Map width in cells (20 columns)
pub const MAP_WIDTH: u8 = 20;

/// Map height in cells (20 rows)
pub const MAP_HEIGHT: u8 = 20;

/// Maximum (and starting) health
pub const MAX_HEALTH: u32 = 100;

/// Maximum (and starting) oxygen
pub const MAX_OXYGEN: u32 = 100;

/// Maximum (and starting) battery charge
pub const MAX_BATTERY: u32 = 100;

/// Lives shown on the status panel
pub const INITIAL_LIVES: u32 = 3;

/// Oxygen paid for a move attempt, successful or not
pub const MOVE_OXYGEN_COST: u32 = 2;

/// Battery paid for one illumination
pub const ILLUMINATE_BATTERY_COST: u32 = 5;

/// Chebyshev distance within which a visible enemy notices the player
pub const DETECTION_RADIUS: i16 = 3;

/// Damage dealt by a stationary enemy
pub const STATIONARY_DAMAGE: u32 = 20;

/// Damage dealt by a moving enemy
pub const MOVING_DAMAGE: u32 = 15;

/// A moving enemy skips its step with probability 1 / `MOVING_SKIP_DENOMINATOR`
pub const MOVING_SKIP_DENOMINATOR: u32 = 3;

/// Score awarded for a coin
pub const COIN_SCORE: u32 = 50;

/// Score awarded for a battery pack or oxygen tank
pub const SUPPLY_SCORE: u32 = 20;

/// Battery restored by a battery pack (30% of `MAX_BATTERY`)
pub const BATTERY_PACK_CHARGE: u32 = 30;

/// Oxygen restored by an oxygen tank (40% of `MAX_OXYGEN`)
pub const OXYGEN_TANK_AMOUNT: u32 = 40;

/// Player start on a generated map
pub const GENERATED_START: Pos = Pos::new(5, 5);

/// Interior wall placement attempts on a generated map
pub const GENERATED_OBSTACLES: u32 = 25;

/// Enemy placement attempts on a generated map
pub const GENERATED_ENEMIES: u32 = 15;

/// Coin placement attempts: base + rand(0..spread)
pub const GENERATED_COINS: (u32, u32) = (10, 6);

/// Battery pack placement attempts: base + rand(0..spread)
pub const GENERATED_BATTERY_PACKS: (u32, u32) = (3, 3);

/// Oxygen tank placement attempts: base + rand(0..spread)
pub const GENERATED_OXYGEN_TANKS: (u32, u32) = (3, 3);

/// Grid coordinate. Signed so that off-map neighbours can be represented
/// and rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i16,
    pub y: i16,
}

impl Pos {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one step in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev (king-move) distance
    pub fn chebyshev(self, other: Pos) -> i16 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < MAP_WIDTH as i16 && self.y >= 0 && self.y < MAP_HEIGHT as i16
    }
}

/// The four cardinal directions
///
/// `y` grows downwards, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order random walks index them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Player intents accepted by the step function
///
/// These are produced by both the terminal key map and the headless protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move one tile
    Move(Direction),
    /// Spend battery to light the adjacent tile
    Illuminate(Direction),
    /// Restore the initial configuration
    Reset,
    /// Leave the game (handled by the presentation layer)
    Quit,
}

impl Intent {
    /// Parse an intent from a protocol token (case-insensitive)
    ///
    /// Accepts the camelCase names and the single-key shortcuts of the
    /// terminal layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use holy_diver_types::{Direction, Intent};
    ///
    /// assert_eq!(Intent::from_str("illuminateUp"), Some(Intent::Illuminate(Direction::Up)));
    /// assert_eq!(Intent::from_str("D"), Some(Intent::Move(Direction::Right)));
    /// assert_eq!(Intent::from_str("reset"), Some(Intent::Reset));
    /// assert_eq!(Intent::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "moveup" | "w" => Some(Intent::Move(Direction::Up)),
            "movedown" | "s" => Some(Intent::Move(Direction::Down)),
            "moveleft" | "a" => Some(Intent::Move(Direction::Left)),
            "moveright" | "d" => Some(Intent::Move(Direction::Right)),
            "illuminateup" | "i" => Some(Intent::Illuminate(Direction::Up)),
            "illuminatedown" | "k" => Some(Intent::Illuminate(Direction::Down)),
            "illuminateleft" | "j" => Some(Intent::Illuminate(Direction::Left)),
            "illuminateright" | "l" => Some(Intent::Illuminate(Direction::Right)),
            "reset" | "r" => Some(Intent::Reset),
            "quit" | "q" => Some(Intent::Quit),
            _ => None,
        }
    }

    /// Convert to the camelCase protocol token
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Move(Direction::Up) => "moveUp",
            Intent::Move(Direction::Down) => "moveDown",
            Intent::Move(Direction::Left) => "moveLeft",
            Intent::Move(Direction::Right) => "moveRight",
            Intent::Illuminate(Direction::Up) => "illuminateUp",
            Intent::Illuminate(Direction::Down) => "illuminateDown",
            Intent::Illuminate(Direction::Left) => "illuminateLeft",
            Intent::Illuminate(Direction::Right) => "illuminateRight",
            Intent::Reset => "reset",
            Intent::Quit => "quit",
        }
    }
}

/// Static terrain classification of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Terrain {
    #[default]
    Open,
    Wall,
}

/// One-shot pickups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    Coin,
    BatteryPack,
    OxygenTank,
}

impl CollectibleKind {
    /// Score awarded on first pickup
    pub fn score(self) -> u32 {
        match self {
            CollectibleKind::Coin => COIN_SCORE,
            CollectibleKind::BatteryPack | CollectibleKind::OxygenTank => SUPPLY_SCORE,
        }
    }

    /// Map-file and render symbol
    pub fn symbol(self) -> char {
        match self {
            CollectibleKind::Coin => '*',
            CollectibleKind::BatteryPack => 'B',
            CollectibleKind::OxygenTank => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '*' => Some(CollectibleKind::Coin),
            'B' => Some(CollectibleKind::BatteryPack),
            'O' => Some(CollectibleKind::OxygenTank),
            _ => None,
        }
    }
}

/// Enemy variants
///
/// - **Stationary**: never moves, hits for 20
/// - **Moving**: random walk once active, hits for 15
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Stationary,
    Moving,
}

impl EnemyKind {
    pub fn damage(self) -> u32 {
        match self {
            EnemyKind::Stationary => STATIONARY_DAMAGE,
            EnemyKind::Moving => MOVING_DAMAGE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Stationary => "stationary",
            EnemyKind::Moving => "moving",
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    /// Health reached zero
    Health,
    /// Oxygen reached zero
    Oxygen,
}

impl DeathCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeathCause::Health => "health",
            DeathCause::Oxygen => "oxygen",
        }
    }

    /// Short end-of-run message
    pub fn message(&self) -> &'static str {
        match self {
            DeathCause::Health => "Your suit is torn apart",
            DeathCause::Oxygen => "You ran out of oxygen",
        }
    }
}
