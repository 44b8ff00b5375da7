//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the whole world simulation of the diving game: the
//! terrain grid, the visibility map, the player and enemies, the collectibles
//! registry, and the [`World`] that runs the turn cycle. It has no
//! dependency on terminals or rendering:
//!
//! - **Deterministic**: the random source is injected, so a seed replays a game
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: the terminal, the headless adapter and tests all drive the same `World`
//!
//! # Module Structure
//!
//! - [`grid`]: 20x20 wall/open terrain
//! - [`visibility`]: monotonic revealed-tile map
//! - [`player`]: position plus health, oxygen, battery
//! - [`enemy`]: stationary and moving enemies in one tagged struct
//! - [`collectibles`]: one-shot coins, battery packs and oxygen tanks
//! - [`layout`]: map file parsing and procedural generation
//! - [`rng`]: seeded random source
//! - [`world`]: turn orchestration
//! - [`snapshot`]: render-ready read view
//!
//! # Turn Rules
//!
//! - **Moving** costs 2 oxygen, even into a wall. Moving into an enemy
//!   costs that enemy's damage instead and leaves the player in place.
//! - **Illuminating** an adjacent tile costs 5 battery and exposes and
//!   activates any enemy standing there. With less than 5 battery it does nothing.
//! - **Enemies** wake up when their tile is lit and within 3 tiles
//!   (Chebyshev) of the player. Awake moving enemies random-walk.
//! - Any enemy ending its step on the player's tile deals its damage.
//! - The run ends when health or oxygen reaches 0.
//!
//! # Example
//!
//! ```
//! use holy_diver_core::{Layout, World};
//! use holy_diver_core::rng::seeded;
//! use holy_diver_types::{Direction, Intent, Pos};
//!
//! let mut world = World::new(Layout::empty(Pos::new(5, 5)), seeded(1));
//!
//! world.step(Intent::Move(Direction::Right));
//! world.step(Intent::Illuminate(Direction::Down));
//!
//! assert_eq!(world.player().oxygen(), 98);
//! assert_eq!(world.player().battery(), 95);
//! assert!(!world.is_over());
//! ```

pub mod collectibles;
pub mod enemy;
pub mod grid;
pub mod layout;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod visibility;
pub mod world;

pub use holy_diver_types as types;

// Re-export commonly used types for convenience
pub use collectibles::{Collectible, Collectibles};
pub use enemy::Enemy;
pub use grid::Grid;
pub use layout::{Layout, LayoutSource, MapError};
pub use player::Player;
pub use rng::{seeded, GameRng};
pub use snapshot::{TileView, WorldSnapshot};
pub use visibility::Visibility;
pub use world::{
    ActionOutcome, IlluminateOutcome, MoveOutcome, StepReport, TickReport, World,
};
