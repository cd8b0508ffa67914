//! Uniform distribution for Y-coordinates
//!
//! Y values are drawn from the half-open range [0.0, 1.0) using the same
//! random source as the X sampler.
//!
//! # Example
//!
//! ```
//! use mst_gen::distribution::uniform::UnitUniform;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let uniform = UnitUniform::new();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
//!
//! for _ in 0..10 {
//!     let y = uniform.draw(&mut rng);
//!     assert!((0.0..1.0).contains(&y));
//! }
//! ```

use rand::RngCore;
use rand_distr::{Distribution as _, Uniform};

pub const UNIFORM_MIN: f64 = 0.0;
pub const UNIFORM_MAX: f64 = 1.0;

/// Uniform distribution over [0.0, 1.0)
#[derive(Debug, Clone)]
pub struct UnitUniform {
    inner: Uniform<f64>,
}

impl UnitUniform {
    pub fn new() -> Self {
        Self {
            inner: Uniform::new(UNIFORM_MIN, UNIFORM_MAX),
        }
    }

    #[inline(always)]
    pub fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        self.inner.sample(rng)
    }
}

impl Default for UnitUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_uniform_distribution_range() {
        let uniform = UnitUniform::new();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        for _ in 0..10_000 {
            let y = uniform.draw(&mut rng);
            assert!(y >= UNIFORM_MIN && y < UNIFORM_MAX);
        }
    }

    #[test]
    fn test_uniform_distribution_coverage() {
        let uniform = UnitUniform::new();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut buckets = vec![0u32; 10];

        for _ in 0..10_000 {
            let bucket = (uniform.draw(&mut rng) * 10.0) as usize;
            buckets[bucket.min(9)] += 1;
        }

        // Each bucket should have roughly 1000 samples (10000 / 10)
        // Allow 20% deviation for randomness
        for count in buckets {
            assert!(count > 800 && count < 1200, "Bucket count {} outside expected range", count);
        }
    }

    #[test]
    fn test_uniform_distribution_seeded() {
        let uniform = UnitUniform::new();
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(12345);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(12345);

        // Same seed should produce same sequence
        for _ in 0..10 {
            assert_eq!(uniform.draw(&mut rng1), uniform.draw(&mut rng2));
        }
    }
}
