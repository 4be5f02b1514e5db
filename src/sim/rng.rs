//! Input-perturbed random stream
//!
//! The meteor lane RNG is reseeded every tick from its own next output mixed
//! with the inverted button mask, so what the player holds changes which lanes
//! come next. Lane draws in between reseeds come from a plain PCG32.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::ROW_COUNT;

/// Seeded PCG32 that is re-keyed once per tick
#[derive(Debug, Clone)]
pub struct SeedStream {
    rng: Pcg32,
    /// Seed used for the most recent (re)seed
    seed: u64,
}

impl SeedStream {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed in effect since the last reseed
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a lane in 1..=ROW_COUNT that differs from `previous`
    pub fn next_row(&mut self, previous: u8) -> u8 {
        loop {
            let row = self.rng.random_range(1..=ROW_COUNT);
            if row != previous {
                return row;
            }
        }
    }

    /// Mix the next raw draw with the inverted input mask and restart from it
    pub fn reseed(&mut self, inverted_input: u16) {
        let prior = self.rng.next_u32();
        self.seed = u64::from(prior ^ u32::from(inverted_input));
        self.rng = Pcg32::seed_from_u64(self.seed);
    }
}
