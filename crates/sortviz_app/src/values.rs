//! Random array generation.
//!
//! Uses a seeded ChaCha8 RNG so identical seeds produce identical arrays,
//! which keeps scenarios and tests reproducible. Values land in 5..=104 so
//! even the smallest bar stays visible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Smallest generated value; keeps every bar taller than zero.
pub const MIN_VALUE: u32 = 5;
/// Largest generated value.
pub const MAX_VALUE: u32 = 104;

/// Deterministic source of random arrays.
#[derive(Debug)]
pub struct ValueSource {
    rng: ChaCha8Rng,
}

impl ValueSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next array of `n` values.
    pub fn next_values(&mut self, n: usize) -> Vec<u32> {
        (0..n).map(|_| self.rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect()
    }
}
