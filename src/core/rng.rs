//! Game-scoped random source.
//!
//! A single `GameRng` is owned by the `Game` and threaded through the deck
//! shuffle and every computer decision, so a fixed seed reproduces an entire
//! session.
//!
//! ```
//! use gem_expedition::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_percent(), b.roll_percent());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create an RNG from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an unseeded RNG. The chosen seed is still recorded so a
    /// surprising game can be reproduced from the logs.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[0, 100)`.
    pub fn roll_percent(&mut self) -> i64 {
        self.inner.gen_range(0..100)
    }

    /// Uniform in-place shuffle; every permutation is equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
