use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::domain::savings_range::SavingsRange;

pub trait SavingsSampler {
    fn sample(&mut self, range: SavingsRange) -> f64;
}

/// Draws uniformly from `[min, max)`.
pub struct UniformSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SavingsSampler for UniformSampler<R> {
    fn sample(&mut self, range: SavingsRange) -> f64 {
        if range.max <= range.min {
            return range.min;
        }
        Uniform::new(range.min, range.max).sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_inside_range() {
        let mut sampler = UniformSampler::new(StdRng::seed_from_u64(7));
        let range = SavingsRange::new(0.05, 0.20);
        for _ in 0..1000 {
            let value = sampler.sample(range);
            assert!((0.05..0.20).contains(&value), "{value}");
        }
    }

    #[test]
    fn degenerate_range_returns_min() {
        let mut sampler = UniformSampler::new(StdRng::seed_from_u64(7));
        assert_eq!(sampler.sample(SavingsRange::new(0.1, 0.1)), 0.1);
    }

    #[test]
    fn same_seed_draws_same_sequence() {
        let range = SavingsRange::new(0.0, 1.0);
        let mut first = UniformSampler::new(StdRng::seed_from_u64(99));
        let mut second = UniformSampler::new(StdRng::seed_from_u64(99));
        let a: Vec<f64> = (0..5).map(|_| first.sample(range)).collect();
        let b: Vec<f64> = (0..5).map(|_| second.sample(range)).collect();
        assert_eq!(a, b);
    }
}
