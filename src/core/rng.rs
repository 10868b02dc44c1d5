//! Deterministic random number generation.
//!
//! Every random draw in a game (die rolls, task rewards and penalties, task
//! queue shuffles, special-cell placement) goes through `GameRng`, so a
//! seeded session replays identically.
//!
//! ```
//! use path_duel::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_die(6), b.roll_die(6));
//!
//! // Independent stream for board layout
//! let mut board = a.for_context("board");
//! let _ = board.gen_inclusive(1, 10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded game RNG.
///
/// Uses ChaCha8, which gives the same stream on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from OS entropy, for sessions without a configured seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific purpose.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Roll a die with `faces` sides, returning a value in `1..=faces`.
    pub fn roll_die(&mut self, faces: u8) -> u8 {
        self.inner.gen_range(1..=faces.max(1))
    }

    /// Uniform integer in the inclusive range `[low, high]`.
    pub fn gen_inclusive(&mut self, low: u8, high: u8) -> u8 {
        self.inner.gen_range(low..=high.max(low))
    }

    /// Bernoulli draw.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
