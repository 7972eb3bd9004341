//! The simulation's single deterministic RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `SimConfig::seed`, and every
//! random decision draws from it in a fixed order: spawn decision, entrance
//! choice, vehicle attribute draws, activation order, FCFS spot choice and
//! pathfinding tie-break perturbation.  The tick loop is single-threaded, so
//! the same seed always reproduces the same run.  There is no hidden global
//! generator anywhere in the workspace.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the tie-break perturbation added to candidate
/// scores.  Kept below 1 so it can never reorder candidates whose integer
/// scores differ.
pub const PERTURBATION_SCALE: f64 = 0.5;

/// Simulation-level seeded RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
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

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// A small non-negative jitter in `[0, PERTURBATION_SCALE)` used to break
    /// ties between equally ranked candidates.
    #[inline]
    pub fn perturbation(&mut self) -> f64 {
        self.0.gen_range(0.0..PERTURBATION_SCALE)
    }
}
