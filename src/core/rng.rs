//! Seeded move selection for random agents and simulated games.
//!
//! A `GameRng` is a ChaCha8 stream. `fork` derives a child stream per game or
//! per seat, so a batch of simulations is reproducible from one seed.
//!
//! ```
//! use rust_mancala::core::GameRng;
//!
//! let mut batch = GameRng::new(42);
//! let mut seat = batch.fork();
//!
//! let mut replay = GameRng::new(42);
//! let mut replay_seat = replay.fork();
//! assert_eq!(seat.gen_range_usize(0..6), replay_seat.gen_range_usize(0..6));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment separating the seeds of successive forks.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Stream seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Derive the next child stream.
    ///
    /// Children depend only on this stream's seed and how many children came
    /// before, not on how many values were drawn.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform pick from `items`, `None` when empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
