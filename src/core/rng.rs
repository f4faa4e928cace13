//! RNG module - deterministic random numbers for enemy behavior
//!
//! A simple LCG keeps the core free of external randomness so tests can
//! seed it and replay exact enemy movement and spawn sequences.

use crate::types::Direction;

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick one of the four cardinal directions uniformly
    pub fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.next_range(4) as usize]
    }
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
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(777);
        for _ in 0..1000 {
            assert!(rng.next_range(4) < 4);
        }
    }

    #[test]
    fn test_next_direction_covers_all() {
        let mut rng = SimpleRng::new(9);
        let mut seen = [false; 4];
        for _ in 0..200 {
            match rng.next_direction() {
                Direction::Up => seen[0] = true,
                Direction::Down => seen[1] = true,
                Direction::Left => seen[2] = true,
                Direction::Right => seen[3] = true,
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
