//! Deterministic RNG wrapper for grid generation and endpoint picking.
//!
//! Every random decision in the workspace goes through a seeded `SmallRng`,
//! so a grid is fully reproducible from `(config, seed)`.  The search itself
//! is never random.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG used outside the search core.
///
/// Used only in single-threaded contexts.  If a caller needs independent
/// streams (e.g. one for obstacles, one for endpoints), derive them with
/// [`child`](Self::child).
pub struct MapRng(SmallRng);

impl MapRng {
    pub fn new(seed: u64) -> Self {
        MapRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Used by the demo when no `--seed` is given.
    pub fn from_entropy() -> Self {
        MapRng(SmallRng::from_entropy())
    }

    /// Derive a child `MapRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> MapRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        MapRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice; `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
