use std::f64::consts::PI;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Standard normal noise via the Box-Muller transform.
///
/// Each transform yields two independent samples; the second is kept for the
/// next call.
#[derive(Debug)]
pub struct GaussianNoise {
    rng: StdRng,
    spare: Option<f64>,
}

impl GaussianNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            spare: None,
        }
    }

    pub fn sample(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        // (0, 1] keeps ln away from zero
        let u1 = 1.0 - self.rng.gen_range(0.0..1.0);
        let u2: f64 = self.rng.gen_range(0.0..1.0);
        let r = (-2.0 * f64::ln(u1)).sqrt();
        let theta = 2.0 * PI * u2;
        self.spare = Some(r * theta.sin());
        r * theta.cos()
    }
}

/// Generates `num_samples` points of `sin(2π · cycles · i / num_samples)` plus
/// unit gaussian noise.
pub fn generate(num_samples: usize, cycles: f32, seed: u64) -> Vec<f32> {
    let mut noise = GaussianNoise::new(seed);
    let step = 2.0 * PI * f64::from(cycles) / num_samples as f64;

    (0..num_samples)
        .map(|i| ((i as f64 * step).sin() + noise.sample()) as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn same_seed_same_stream() {
        assert_eq!(generate(1000, 4.0, 42), generate(1000, 4.0, 42));
        assert_ne!(generate(1000, 4.0, 42), generate(1000, 4.0, 43));
    }

    #[test]
    fn noise_is_standard_normal() {
        let mut noise = GaussianNoise::new(3);
        let n = 200_000;
        let samples: Vec<f64> = (0..n).map(|_| noise.sample()).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|z| (z - mean) * (z - mean)).sum::<f64>() / n as f64;

        assert_approx_eq!(mean, 0.0, 0.02);
        assert_approx_eq!(var, 1.0, 0.02);
    }

    #[test]
    fn signal_follows_sine() {
        let n = 100_000;
        let input = generate(n, 1.0, 9);
        // the first quarter period averages 2/π above zero
        let quarter = &input[..n / 4];
        let mean = quarter.iter().map(|&v| v as f64).sum::<f64>() / quarter.len() as f64;
        assert_approx_eq!(mean, 2.0 / PI, 0.05);
    }

    #[test]
    fn empty_stream() {
        assert!(generate(0, 4.0, 1).is_empty());
    }
}
