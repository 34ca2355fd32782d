//! Shared invocation context passed to every capability handler.
//!
//! The only mutable state a handler may touch is the random source, which
//! lives here behind a mutex so a seeded context makes the randomness-backed
//! tools deterministic in tests.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-server handler context, constructed once at startup.
pub struct Context {
    rng: Mutex<StdRng>,
}

impl Context {
    /// Create a context with an entropy-seeded random source.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a context with a fixed seed for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Pick a uniformly random element.
    ///
    /// Panics if `items` is empty; call sites select from fixed non-empty
    /// literal tables.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> &'a T {
        let index = self.rng.lock().gen_range(0..items.len());
        &items[index]
    }

    /// Uniform integer in `min..=max`. Callers must ensure `min <= max`.
    pub fn range(&self, min: i64, max: i64) -> i64 {
        self.rng.lock().gen_range(min..=max)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
