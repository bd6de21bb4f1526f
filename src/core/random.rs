// src/core/random.rs

//! The random-outcome primitive shared by every game model.

use rand::prelude::*;

use super::state::Outcome;

/// Fair binary draws backed by a seedable PRNG.
///
/// Every model owns its own `RandomBit`. Seeding makes a whole game
/// reproducible, which the tests rely on. Not `Clone`: two copies would
/// replay the same stream. Derive a child with [`RandomBit::next_seed`] instead.
#[derive(Debug)]
pub struct RandomBit {
    rng: StdRng,
}

impl Default for RandomBit {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomBit {
    /// Creates a generator seeded from the thread-local entropy source.
    pub fn new() -> Self {
        Self::seeded(rand::random::<u64>())
    }

    /// Creates a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Restarts the generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Draws `Up` or `Down`, each with probability exactly one half.
    pub fn draw(&mut self) -> Outcome {
        let outcome = if self.rng.random_bool(0.5) { Outcome::Up } else { Outcome::Down };
        tracing::trace!(%outcome, "random bit drawn");
        outcome
    }

    /// Returns `true` with probability `p`. `p` is clamped to `[0, 1]`; NaN counts as 0.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.rng.random_bool(p)
    }

    /// Applies a uniformly random permutation to `items` (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Draws a seed for a child generator.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random::<u64>()
    }
}
