//! ChaCha-backed offset source
//!
//! Uses ChaCha8 rather than `StdRng` so seeded runs stay reproducible across
//! platforms and `rand` releases.

use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::traits::OffsetSource;

/// Uniform i.i.d. offsets in `{-1, 0, 1}`.
#[derive(Debug, Clone)]
pub struct SeededOffsets {
    rng: ChaCha8Rng,
    dist: Uniform<i64>,
}

impl SeededOffsets {
    /// Seed deterministically when `seed` is given, from OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "seeding offset source");
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        debug!("seeding offset source from entropy");
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            dist: Uniform::new_inclusive(-1, 1),
        }
    }
}

impl OffsetSource for SeededOffsets {
    fn next_offset(&mut self) -> i64 {
        self.dist.sample(&mut self.rng)
    }
}
