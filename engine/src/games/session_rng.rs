use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable random source for a game session. Every random decision in a
/// session goes through this wrapper, so a session replays identically
/// from its seed.
#[derive(Debug)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range(&mut self, range: Range<usize>) -> usize {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
