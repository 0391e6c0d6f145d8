//! Deterministic, injectable RNG for node sampling.
//!
//! # Determinism strategy
//!
//! Every sampled query gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (query_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive query indices uniformly across the seed space.
//! This means:
//!
//! - Queries never share RNG state, so a batch can be split across worker
//!   threads without changing any result.
//! - Appending trips to a batch does not disturb the draws of earlier trips.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable random source passed explicitly to the samplers.
///
/// Each worker should own its instance, derived via [`SampleRng::for_query`];
/// sharing one stream across threads would make draws order-dependent.
#[derive(Clone, Debug)]
pub struct SampleRng(SmallRng);

impl SampleRng {
    pub fn new(seed: u64) -> Self {
        SampleRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from the run's global seed and a query index.
    pub fn for_query(global_seed: u64, query: u64) -> Self {
        let seed = global_seed ^ query.wrapping_mul(MIXING_CONSTANT);
        SampleRng(SmallRng::seed_from_u64(seed))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
