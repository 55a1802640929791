//! Random source port.
//!
//! All randomness in a round (who is an impostor, which category is drawn)
//! goes through [`RandomSource`] so tests can pin the outcome.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index generator.
pub trait RandomSource: Send {
    /// Return an index uniformly distributed in `0..upper`.
    ///
    /// Callers never pass `upper == 0`.
    fn index(&mut self, upper: usize) -> usize;
}

/// Shuffle `items` in place (Fisher–Yates) using `rng`.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

/// Pick one element of `items` uniformly, or `None` when empty.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()))
}

/// [`RandomSource`] backed by the standard RNG.
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible rounds.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}
