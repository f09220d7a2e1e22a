// [libs/core/trigg/src/rng.rs]
//! The word-chooser PRNG (§6 "Randomness"): a linear congruential generator
//! with transition `s' = s*69069 + 262145`, `s0 = 1`, output `s' >> 16`.
//! This generator is specified exactly and must not be swapped for a
//! "better" one without regenerating every golden vector derived from it.

use rand_core::{impls, Error, RngCore, SeedableRng};
use std::sync::atomic::{AtomicU32, Ordering};

/// Seed the LCG starts from absent an explicit call to `trigg_srand`.
pub const DEFAULT_SEED: u32 = 1;

/// The core's specified word-chooser generator.
#[derive(Debug, Clone, Copy)]
pub struct TriggRng {
    state: u32,
}

impl TriggRng {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// One LCG step, returning the top 16 bits of the new state — the
    /// `r = s' >> 16` output the spec defines.
    #[must_use]
    pub fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(69069).wrapping_add(262145);
        self.state >> 16
    }
}

impl Default for TriggRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for TriggRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for TriggRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// A lock-free, shareable version of [`TriggRng`] for multi-threaded mining
/// (§6: "the seed is guarded so that each call produces one atomic step").
/// Uses a CAS loop instead of a mutex so contention degrades to retries
/// rather than blocking.
#[derive(Debug)]
pub struct AtomicTriggRng {
    state: AtomicU32,
}

impl AtomicTriggRng {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            state: AtomicU32::new(seed),
        }
    }

    /// Performs one atomic LCG step and returns its output.
    pub fn step(&self) -> u32 {
        let mut observed = self.state.load(Ordering::Relaxed);
        loop {
            let next = observed.wrapping_mul(69069).wrapping_add(262145);
            match self.state.compare_exchange_weak(
                observed,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next >> 16,
                Err(actual) => observed = actual,
            }
        }
    }
}

impl Default for AtomicTriggRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_matches_spec_transition() {
        let mut rng = TriggRng::new(1);
        let expected_state = 1u32.wrapping_mul(69069).wrapping_add(262145);
        assert_eq!(rng.step(), expected_state >> 16);
    }

    #[test]
    fn atomic_and_plain_rng_agree() {
        let mut plain = TriggRng::new(7);
        let atomic = AtomicTriggRng::new(7);
        for _ in 0..64 {
            assert_eq!(plain.step(), atomic.step());
        }
    }
}
