//! Deterministic random number generation for root word selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create independent streams for concurrent sessions
//! - **Inspectable**: The seed stays observable for replaying a session
//!
//! ## Usage
//!
//! ```
//! use scramble::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for an independent session
//! let mut session_rng = rng.fork();
//!
//! // Original and fork produce different sequences
//! let items = [1, 2, 3, 4, 5, 6, 7, 8];
//! let _ = rng.choose(&items);
//! let _ = session_rng.choose(&items);
//!
//! // But forks are deterministic - same fork counter = same stream
//! let mut rng2 = GameRng::new(42);
//! let session_rng2 = rng2.fork();
//! assert_eq!(session_rng.seed(), session_rng2.seed());
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for drawing root words.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Same seed, same sequence of draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The generated seed stays observable through [`seed`](Self::seed),
    /// so a surprising session can still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence. Used to
    /// hand every concurrent session its own stream from one application
    /// RNG.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose a uniformly random element from a slice.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
