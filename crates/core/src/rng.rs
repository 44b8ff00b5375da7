//! RNG module - the injectable random source
//!
//! Every random decision in the simulation (map generation, enemy variant
//! choice for `M` tiles, enemy random walks) goes through a caller-supplied
//! [`rand::Rng`]. The default source is a seeded xorshift generator, so a
//! seed fully determines a game.

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::types::{Pos, MAP_HEIGHT, MAP_WIDTH};

/// Default random source for worlds
pub type GameRng = XorShiftRng;

/// Create a deterministic generator from a seed
pub fn seeded(seed: u64) -> GameRng {
    GameRng::seed_from_u64(seed)
}

/// Fresh seed from the thread-local entropy source
pub fn random_seed() -> u64 {
    rand::thread_rng().gen()
}

/// Uniform position with `margin` cells kept clear on every side
///
/// A margin of 1 skips the border ring, 2 also skips the ring inside it.
pub fn position_within<R: Rng + ?Sized>(rng: &mut R, margin: i16) -> Pos {
    let x = rng.gen_range(margin..MAP_WIDTH as i16 - margin);
    let y = rng.gen_range(margin..MAP_HEIGHT as i16 - margin);
    Pos::new(x, y)
}
