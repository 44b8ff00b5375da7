//! Headless driver - line-delimited JSON observations
//!
//! Reads one intent token per input line and answers every accepted intent
//! with a single JSON [`Observation`] line. An observation is also written
//! once at startup so a controller sees the initial state before acting.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{TileView, World, WorldSnapshot};
use crate::types::{Intent, MAP_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosView {
    pub x: i16,
    pub y: i16,
}

/// An enemy as currently drawn on the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyView {
    pub x: i16,
    pub y: i16,
    /// `"stationary"` or `"moving"`
    pub kind: String,
}

/// One observation line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Observations written so far in this session, starting at 0
    pub seq: u64,
    /// Protocol token of the intent that produced this observation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    pub episode_id: u32,
    pub turn: u32,
    /// Map rows top to bottom, one render symbol per tile
    pub rows: Vec<String>,
    pub player: PosView,
    /// Revealed enemies, row-major
    pub enemies: Vec<EnemyView>,
    pub health: u32,
    pub oxygen: u32,
    pub battery: u32,
    pub lives: u32,
    pub score: u32,
    pub collectibles_left: u32,
    pub game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl Observation {
    pub fn from_snapshot(seq: u64, intent: Option<Intent>, snap: &WorldSnapshot) -> Self {
        let mut enemies = Vec::new();
        for (y, row) in snap.tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if let TileView::Enemy(kind) = tile {
                    enemies.push(EnemyView {
                        x: x as i16,
                        y: y as i16,
                        kind: kind.as_str().to_string(),
                    });
                }
            }
        }

        Self {
            seq,
            intent: intent.map(|i| i.as_str().to_string()),
            episode_id: snap.episode_id,
            turn: snap.turn,
            rows: (0..MAP_HEIGHT as usize).map(|y| snap.row_string(y)).collect(),
            player: PosView {
                x: snap.player.x,
                y: snap.player.y,
            },
            enemies,
            health: snap.health,
            oxygen: snap.oxygen,
            battery: snap.battery,
            lives: snap.lives,
            score: snap.score,
            collectibles_left: snap.collectibles_left,
            game_over: snap.game_over,
            cause: snap.death_cause.map(|c| c.as_str().to_string()),
        }
    }
}

/// Session summary returned when input ends or `quit` arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub observations: u64,
    pub ignored_lines: u64,
    pub quit: bool,
}

/// Drive `world` from `input` until EOF or a quit intent.
pub fn run<R, I, O>(world: &mut World<R>, input: I, mut output: O) -> Result<SessionStats>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut stats = SessionStats::default();
    let mut snap = WorldSnapshot::default();

    emit(world, None, &mut snap, &mut stats, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let Some(intent) = Intent::from_str(&line) else {
            if !line.trim().is_empty() {
                log::debug!("headless: ignoring {:?}", line.trim());
                stats.ignored_lines += 1;
            }
            continue;
        };

        let report = world.step(intent);
        if report.quit() {
            stats.quit = true;
            break;
        }
        emit(world, Some(intent), &mut snap, &mut stats, &mut output)?;
    }

    output.flush()?;
    Ok(stats)
}

fn emit<R: Rng, O: Write>(
    world: &World<R>,
    intent: Option<Intent>,
    snap: &mut WorldSnapshot,
    stats: &mut SessionStats,
    output: &mut O,
) -> Result<()> {
    world.snapshot_into(snap);
    let obs = Observation::from_snapshot(stats.observations, intent, snap);
    serde_json::to_writer(&mut *output, &obs)?;
    output.write_all(b"\n")?;
    output.flush()?;
    stats.observations += 1;
    Ok(())
}
