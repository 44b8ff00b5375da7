//! Layout module - the static starting configuration of a world
//!
//! A layout is the terrain grid plus the player start, enemy spawns and
//! collectible spawns. It comes either from a character map or from the
//! procedural generator, and it is what `World::reset` returns to.
//!
//! # Map format
//!
//! Twenty rows of twenty characters:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `P` | player start (exactly one) |
//! | `M` | enemy spawn, variant rolled at load time |
//! | `x` | wall |
//! | `*` `B` `O` | coin, battery pack, oxygen tank |
//! | anything else | open water |

use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;

use crate::collectibles::Collectibles;
use crate::enemy::Enemy;
use crate::grid::Grid;
use crate::rng::position_within;
use crate::types::{
    CollectibleKind, EnemyKind, Pos, Terrain, GENERATED_BATTERY_PACKS, GENERATED_COINS,
    GENERATED_ENEMIES, GENERATED_OBSTACLES, GENERATED_OXYGEN_TANKS, GENERATED_START, MAP_HEIGHT,
    MAP_WIDTH,
};

/// Why a map could not be used
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("map has {found} rows, expected {}", MAP_HEIGHT)]
    WrongRowCount { found: usize },
    #[error("map row {row} has {found} columns, expected {}", MAP_WIDTH)]
    WrongRowWidth { row: usize, found: usize },
    #[error("map has no player start 'P'")]
    MissingPlayer,
    #[error("map has a second player start at ({}, {})", .at.x, .at.y)]
    DuplicatePlayer { at: Pos },
}

/// Where a layout came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSource {
    File,
    Generated,
    Custom,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub(crate) grid: Grid,
    pub(crate) start: Pos,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) collectibles: Collectibles,
    source: LayoutSource,
}

impl Layout {
    /// Bordered, otherwise empty layout. Building block for hand-made maps.
    pub fn empty(start: Pos) -> Self {
        Self {
            grid: Grid::bordered(),
            start,
            enemies: Vec::new(),
            collectibles: Collectibles::new(),
            source: LayoutSource::Custom,
        }
    }

    pub fn with_wall(mut self, pos: Pos) -> Self {
        self.grid.set(pos, Terrain::Wall);
        self
    }

    pub fn with_enemy(mut self, pos: Pos, kind: EnemyKind) -> Self {
        self.enemies.push(Enemy::new(kind, pos));
        self
    }

    pub fn with_collectible(mut self, pos: Pos, kind: CollectibleKind) -> Self {
        self.collectibles.place(pos, kind);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn collectibles(&self) -> &Collectibles {
        &self.collectibles
    }

    pub fn source(&self) -> LayoutSource {
        self.source
    }

    /// Parse the character map format.
    pub fn parse<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Result<Self, MapError> {
        let mut rows: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while rows.last().is_some_and(|l| l.is_empty()) {
            rows.pop();
        }

        if rows.len() != MAP_HEIGHT as usize {
            return Err(MapError::WrongRowCount { found: rows.len() });
        }

        let mut grid = Grid::open();
        let mut start = None;
        let mut enemies = Vec::new();
        let mut collectibles = Collectibles::new();

        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != MAP_WIDTH as usize {
                return Err(MapError::WrongRowWidth { row: y, found: width });
            }
            for (x, c) in row.chars().enumerate() {
                let pos = Pos::new(x as i16, y as i16);
                match c {
                    'P' => {
                        if start.is_some() {
                            return Err(MapError::DuplicatePlayer { at: pos });
                        }
                        start = Some(pos);
                    }
                    'M' => {
                        let kind = if rng.gen_range(0..2) == 0 {
                            EnemyKind::Stationary
                        } else {
                            EnemyKind::Moving
                        };
                        enemies.push(Enemy::new(kind, pos));
                    }
                    'x' => {
                        grid.set(pos, Terrain::Wall);
                    }
                    other => {
                        if let Some(kind) = CollectibleKind::from_symbol(other) {
                            collectibles.place(pos, kind);
                        }
                    }
                }
            }
        }

        let start = start.ok_or(MapError::MissingPlayer)?;
        Ok(Self {
            grid,
            start,
            enemies,
            collectibles,
            source: LayoutSource::File,
        })
    }

    /// Read and parse a map file.
    pub fn read<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<Self, MapError> {
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, rng)
    }

    /// Best-effort load: a usable map file, or a generated map.
    pub fn load<R: Rng + ?Sized>(path: Option<&Path>, rng: &mut R) -> Self {
        if let Some(path) = path {
            match Self::read(path, rng) {
                Ok(layout) => {
                    log::info!("loaded map {}", path.display());
                    return layout;
                }
                Err(e) => log::warn!("{}; generating a map instead", e),
            }
        }
        Self::generate(rng)
    }

    /// Procedural map: border walls, scattered obstacles, enemies and supplies.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let start = GENERATED_START;
        let mut grid = Grid::bordered();

        for _ in 0..GENERATED_OBSTACLES {
            let pos = position_within(rng, 2);
            if pos != start {
                grid.set(pos, Terrain::Wall);
            }
        }

        let mut enemies: Vec<Enemy> = Vec::new();
        for _ in 0..GENERATED_ENEMIES {
            let pos = position_within(rng, 2);
            if !grid.is_open(pos) || pos == start || enemies.iter().any(|e| e.pos() == pos) {
                continue;
            }
            let kind = if rng.gen_range(0..3) == 0 {
                EnemyKind::Stationary
            } else {
                EnemyKind::Moving
            };
            enemies.push(Enemy::new(kind, pos));
        }

        let mut collectibles = Collectibles::new();
        for (kind, (base, spread)) in [
            (CollectibleKind::Coin, GENERATED_COINS),
            (CollectibleKind::BatteryPack, GENERATED_BATTERY_PACKS),
            (CollectibleKind::OxygenTank, GENERATED_OXYGEN_TANKS),
        ] {
            let attempts = base + rng.gen_range(0..spread);
            for _ in 0..attempts {
                let pos = position_within(rng, 1);
                if !grid.is_open(pos) || pos == start || enemies.iter().any(|e| e.pos() == pos) {
                    continue;
                }
                collectibles.place(pos, kind);
            }
        }

        log::debug!(
            "generated map: {} walls, {} enemies, {} collectibles",
            grid.wall_count(),
            enemies.len(),
            collectibles.len()
        );

        Self {
            grid,
            start,
            enemies,
            collectibles,
            source: LayoutSource::Generated,
        }
    }
}
