//! Random source used for spawn placement.

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Uniform integer draws. Tests substitute a scripted source.
pub trait RandomSource {
    fn uniform_int(&mut self, range: RangeInclusive<i32>) -> i32;
}

impl RandomSource for ChaCha8Rng {
    fn uniform_int(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.gen_range(range)
    }
}

/// A seed taken from the wall clock, for runs that do not ask for one.
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
