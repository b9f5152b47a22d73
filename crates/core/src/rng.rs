//! RNG module - seeded randomness for pile generation
//!
//! A small LCG is enough for shuffling a few dozen tile kinds, and keeping it
//! in-tree makes piles reproducible from a single `u32` seed across platforms.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock (non-deterministic play)
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits cycle with a short period; draw from the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (feed back into `new` to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Seed derived from the system clock. Falls back to 1 if the clock is before the epoch.
pub fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_nanos() as u32) ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut values: Vec<u32> = (0..36).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..36).collect::<Vec<_>>());
        assert_ne!(values, sorted, "36 elements should not survive a shuffle untouched");
    }
}
