use std::f64::consts::PI;

use rand::Rng;
use rand_distr::Distribution;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NormalParameterError {
    #[error("mean must be finite, got {0}")]
    Mean(f64),
    #[error("standard deviation must be finite and non-negative, got {0}")]
    StdDev(f64),
}

/// Normal distribution sampled with the basic Box-Muller transform.
///
/// Each draw consumes two uniforms and keeps only the cosine branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMuller {
    mean: f64,
    std_dev: f64,
}

impl BoxMuller {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, NormalParameterError> {
        if !mean.is_finite() {
            return Err(NormalParameterError::Mean(mean));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(NormalParameterError::StdDev(std_dev));
        }
        Ok(Self { mean, std_dev })
    }
}

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let mut u: f64 = rng.r#gen();
        while u == 0.0 {
            u = rng.r#gen();
        }
        let v: f64 = rng.r#gen();
        self.mean + standard_normal_from_uniforms(u, v) * self.std_dev
    }
}

/// `sqrt(-2 ln u) * cos(2 pi v)` for `u` in `(0, 1)` and `v` in `[0, 1)`.
pub fn standard_normal_from_uniforms(u: f64, v: f64) -> f64 {
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn transform_maps_known_uniforms() {
        // u = e^-0.5 gives a radius of exactly 1.
        let u = (-0.5_f64).exp();
        assert!((standard_normal_from_uniforms(u, 0.0) - 1.0).abs() < 1e-12);
        assert!((standard_normal_from_uniforms(u, 0.5) + 1.0).abs() < 1e-12);
        assert!(standard_normal_from_uniforms(u, 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_std_dev_always_returns_mean() {
        let distribution = BoxMuller::new(12.5, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(distribution.sample(&mut rng), 12.5);
        }
    }

    #[test]
    fn new_rejects_negative_std_dev() {
        assert_eq!(
            BoxMuller::new(1.0, -0.1),
            Err(NormalParameterError::StdDev(-0.1))
        );
        assert!(BoxMuller::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn same_seed_gives_same_samples() {
        let distribution = BoxMuller::new(0.0, 1.0).unwrap();
        let first: Vec<f64> = distribution
            .sample_iter(StdRng::seed_from_u64(99))
            .take(10)
            .collect();
        let second: Vec<f64> = distribution
            .sample_iter(StdRng::seed_from_u64(99))
            .take(10)
            .collect();
        assert_eq!(first, second);
    }
}
