//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG so a match can be replayed from its seed.
//! Uses a simple but effective xorshift algorithm.

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a caller-supplied seed
    pub fn new(seed: u64) -> Self {
        // Mix the seed so small values (timestamps, frame counters) still
        // produce well-spread initial states
        let mut state = (seed ^ 0x9e3779b97f4a7c15).wrapping_mul(0x517cc1b727220a95);
        if state == 0 {
            // xorshift has a fixed point at zero
            state = 0x2545f4914f6cdd1d;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Generate a random boolean
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

        // Should produce different sequences
        let vals1: Vec<_> = (0..10).map(|_| rng1.next_u64()).collect();
        let vals2: Vec<_> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_next_range() {
        let mut rng = SeededRng::new(42);

        for max in [1, 3, 10, 100].iter() {
            for _ in 0..100 {
                let val = rng.next_range(*max);
                assert!(val < *max, "next_range({}) returned {}", max, val);
            }
        }

        // Edge case: max = 0
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_bool_takes_both_values() {
        let mut rng = SeededRng::new(42);

        let mut seen_true = false;
        let mut seen_false = false;
        for _ in 0..100 {
            if rng.next_bool() {
                seen_true = true;
            } else {
                seen_false = true;
            }
        }

        assert!(seen_true && seen_false);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SeededRng::new(0);

        let vals: Vec<_> = (0..10).map(|_| rng.next_u64()).collect();
        assert!(vals.iter().any(|v| *v != 0));
    }
}
