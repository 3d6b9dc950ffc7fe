use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of randomness for event rolls and opportunity generation.
///
/// Object-safe so an engine can hold `Box<dyn RandomSource>`; tests swap in a
/// scripted source to pin exact outcomes.
pub trait RandomSource: Send {
    /// `true` with the given probability (clamped to 0.0–1.0).
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform integer in `[low, high)`. Returns `low` for an empty range.
    fn range(&mut self, low: i64, high: i64) -> i64;

    /// Uniform index in `[0, len)`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize;
}

/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: RngCore + Send> RandomSource for RngSource<R> {
    fn chance(&mut self, probability: f64) -> bool {
        let p = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self.0.random_bool(p)
    }

    fn range(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.0.random_range(low..high)
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.random_range(0..len)
    }
}

/// Deterministic source: the same seed always produces the same simulation.
pub fn seeded(seed: u64) -> RngSource<SmallRng> {
    RngSource(SmallRng::seed_from_u64(seed))
}
