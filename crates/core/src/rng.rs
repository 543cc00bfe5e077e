//! RNG module - seeded random source for obstacle generation
//!
//! Sessions draw obstacle heights from a PCG32 generator. A fixed seed makes a
//! whole run reproducible (tests, headless simulation); interactive play seeds
//! from OS entropy.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Random source owned by a game session.
pub type GameRng = Pcg32;

/// Create a generator from a fixed seed.
pub fn seeded(seed: u64) -> GameRng {
    Pcg32::seed_from_u64(seed)
}

/// Fresh seed from OS entropy.
pub fn entropy_seed() -> u64 {
    rand::random()
}
