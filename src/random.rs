use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// Source of uniform random numbers used to place the car and pick doors.
pub trait RandomGenerator: Default {
    /// Returns a value in `from..to`. The range must not be empty.
    fn next_range(&mut self, from: usize, to: usize) -> usize;

    /// Picks one element uniformly, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len()))
    }
}

/// Process-wide generator backed by `rand`'s thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        rand::rng().random_range(from..to)
    }
}

/// Deterministic linear congruential generator.
#[derive(Debug, Clone)]
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        (self.next().unsigned_abs() as usize) % (to - from) + from
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }
}

/// Reproducible generator on top of [`StdRng`].
///
/// Use it where a fixed seed has to give statistically sound draws, which the
/// LCG of [`CustomNumberGenerator`] does not promise for small ranges.
#[derive(Debug, Clone)]
pub struct SeededRandomGenerator {
    rng: StdRng,
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED as u64)
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        self.rng.random_range(from..to)
    }
}

impl SeededRandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{CustomNumberGenerator, RandomGenerator, SeededRandomGenerator};

    #[test]
    fn outputs_same_numbers() {
        let mut crg = CustomNumberGenerator::new(42);
        assert_eq!(crg.next_range(0, 10), 8);
        assert_eq!(crg.next_range(0, 10), 4);
        assert_eq!(crg.next_range(0, 10), 1);
        assert_eq!(crg.next_range(0, 10), 2);
        assert_eq!(crg.next_range(0, 10), 4);
    }

    #[test]
    fn choose_should_be_same() {
        let items = [432, 6542, 534, 6, 13, 645, 88, 2352, 345, 2667, 8287];
        let mut crg = CustomNumberGenerator::default();
        assert_eq!(crg.choose(&items), Some(&6));
        assert_eq!(crg.choose(&items), Some(&2667));
        assert_eq!(crg.choose(&items), Some(&534));
        assert_eq!(crg.choose(&items), Some(&8287));
        assert_eq!(crg.choose(&items), Some(&6));
    }

    #[test]
    fn choose_from_empty_is_none() {
        let items: [u8; 0] = [];
        let mut crg = CustomNumberGenerator::default();
        assert_eq!(crg.choose(&items), None);
    }

    #[test]
    fn seeded_generator_repeats_itself() {
        let mut first = SeededRandomGenerator::new(7);
        let mut second = SeededRandomGenerator::new(7);
        let a: Vec<usize> = (0..32).map(|_| first.next_range(3, 9)).collect();
        let b: Vec<usize> = (0..32).map(|_| second.next_range(3, 9)).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| (3..9).contains(&x)));
    }
}
