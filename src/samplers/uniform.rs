//! Uniform random sampler drawing points with replacement.

use crate::core::Sampler;
use crate::utils::UniformRandomGenerator;

/// Uniform random sampler drawing indices independently and with replacement.
///
/// Repeated indices within one triplet are allowed; they produce degenerate
/// planes that score zero downstream.
#[derive(Debug, Clone, Default)]
pub struct UniformRandomSampler {
    rng: UniformRandomGenerator,
}

impl UniformRandomSampler {
    /// Construct a new sampler with a random seed.
    pub fn new() -> Self {
        Self {
            rng: UniformRandomGenerator::new(),
        }
    }

    /// Construct a sampler from a fixed seed (primarily for tests).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: UniformRandomGenerator::from_seed(seed),
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self {
            rng: UniformRandomGenerator::from_optional_seed(seed),
        }
    }
}

impl Sampler for UniformRandomSampler {
    fn sample(&mut self, len: usize) -> Option<usize> {
        self.rng.next_index(len)
    }

    fn fork(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_samplers_agree() {
        let mut a = UniformRandomSampler::from_seed(9);
        let mut b = UniformRandomSampler::from_seed(9);
        for _ in 0..50 {
            assert_eq!(a.sample(1000), b.sample(1000));
        }
    }

    #[test]
    fn single_point_cloud_always_yields_index_zero() {
        let mut sampler = UniformRandomSampler::from_seed(3);
        for _ in 0..10 {
            assert_eq!(sampler.sample(1), Some(0));
        }
    }

    #[test]
    fn empty_cloud_yields_none() {
        let mut sampler = UniformRandomSampler::from_seed(3);
        assert_eq!(sampler.sample(0), None);
    }
}
