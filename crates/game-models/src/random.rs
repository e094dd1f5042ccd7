//! Seeded pseudo-random number generator
//!
//! Deterministic xorshift64* source for reproducible Blotto allocations
//! and life-expectancy noise. Implements `rand::RngCore`, so it plugs
//! into anything that takes a `rand::Rng`.

use rand::RngCore;

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state
        let state = seed.wrapping_mul(0x9e3779b97f4a7c15) ^ 0x517cc1b727220a95;
        let mut rng = Self {
            state: if state == 0 { 0x517cc1b727220a95 } else { state },
        };
        for _ in 0..8 {
            rng.step();
        }
        rng
    }

    fn step(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_determinism() {
        let mut r1 = SeededRng::new(42);
        let mut r2 = SeededRng::new(42);

        for _ in 0..100 {
            assert_eq!(r1.next_u64(), r2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SeededRng::new(1);
        let mut rng2 = SeededRng::new(2);

        let vals1: Vec<_> = (0..10).map(|_| rng1.next_u64()).collect();
        let vals2: Vec<_> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SeededRng::new(0);
        let vals: Vec<_> = (0..4).map(|_| rng.next_u64()).collect();
        assert!(vals.iter().any(|v| *v != 0));
    }

    #[test]
    fn test_range_via_rng_trait() {
        let mut rng = SeededRng::new(42);

        for max in [1u32, 3, 10, 1000] {
            for _ in 0..100 {
                let val = rng.random_range(0..max);
                assert!(val < max, "random_range(0..{}) returned {}", max, val);
            }
        }
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = SeededRng::new(7);
        let mut buf = [0u8; 13];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|b| *b != 0));
    }
}
