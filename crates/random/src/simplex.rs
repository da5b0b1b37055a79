//! Fractal OpenSimplex noise fields.
//!
//! Each field samples OpenSimplex noise once per octave. Octave `o` is
//! sampled at `frequency * 2^o`, and the samples are averaged and scaled by
//! `amplitude`:
//!
//! ```text
//! value(p) = amplitude / len(octaves) * Σ noise(p * frequency * 2^o)
//! ```

use crate::Random;
use ::noise::{NoiseFn, OpenSimplex};
use serde::{Deserialize, Serialize};

/// Shape of a fractal noise field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseOptions {
    pub amplitude: f64,
    pub frequency: f64,
    /// Octave exponents; `[1]` samples once at twice the base frequency.
    pub octaves: Vec<f64>,
}

impl Default for NoiseOptions {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            octaves: vec![1.0],
        }
    }
}

impl NoiseOptions {
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_octaves(mut self, octaves: impl Into<Vec<f64>>) -> Self {
        self.octaves = octaves.into();
        self
    }

    /// Sum `sample` over the octaves. An empty octave list yields 0.
    fn fractal(&self, sample: impl Fn(f64) -> f64) -> f64 {
        if self.octaves.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .octaves
            .iter()
            .map(|octave| sample(self.frequency * 2f64.powf(*octave)))
            .sum();
        sum * (self.amplitude / self.octaves.len() as f64)
    }
}

pub trait Noise2 {
    fn sample(&self, x: f64, y: f64) -> f64;
}

pub trait Noise3 {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;
}

pub trait Noise4 {
    fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64;
}

macro_rules! simplex_field {
    ($name:ident, $dims:literal) => {
        #[doc = concat!("Fractal ", stringify!($dims), "D OpenSimplex noise.")]
        #[derive(Clone, Debug)]
        pub struct $name {
            noise: OpenSimplex,
            options: NoiseOptions,
        }

        impl $name {
            pub fn new(seed: u32, options: NoiseOptions) -> Self {
                Self {
                    noise: OpenSimplex::new(seed),
                    options,
                }
            }

            /// Seed the field from the active context. One draw.
            pub fn from_random(random: &mut Random, options: NoiseOptions) -> Self {
                let seed = random.int(0, i64::from(u32::MAX)).clamp(0, i64::from(u32::MAX));
                Self::new(seed as u32, options)
            }

            pub fn options(&self) -> &NoiseOptions {
                &self.options
            }
        }
    };
}

simplex_field!(Simplex2, 2);
simplex_field!(Simplex3, 3);
simplex_field!(Simplex4, 4);

impl Noise2 for Simplex2 {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.options.fractal(|f| self.noise.get([x * f, y * f]))
    }
}

impl Noise3 for Simplex3 {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.options.fractal(|f| self.noise.get([x * f, y * f, z * f]))
    }
}

impl Noise4 for Simplex4 {
    fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.options
            .fractal(|f| self.noise.get([x * f, y * f, z * f, w * f]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_field() {
        let a = Simplex2::new(7, NoiseOptions::default());
        let b = Simplex2::new(7, NoiseOptions::default());
        for i in 0..20 {
            let x = i as f64 * 0.37;
            assert_eq!(a.sample(x, 1.5), b.sample(x, 1.5));
        }
    }

    #[test]
    fn test_amplitude_scales_output() {
        let base = Simplex3::new(3, NoiseOptions::default());
        let loud = Simplex3::new(3, NoiseOptions::default().with_amplitude(4.0));
        let (x, y, z) = (0.3, 0.7, 1.1);
        assert!((loud.sample(x, y, z) - 4.0 * base.sample(x, y, z)).abs() < 1e-9);
    }

    #[test]
    fn test_octaves_average() {
        let options = NoiseOptions::default().with_octaves(vec![0.0, 1.0]);
        let layered = Simplex2::new(11, options);
        let low = Simplex2::new(11, NoiseOptions::default().with_octaves(vec![0.0]));
        let high = Simplex2::new(11, NoiseOptions::default().with_octaves(vec![1.0]));
        let (x, y) = (0.45, 2.2);
        let expected = (low.sample(x, y) + high.sample(x, y)) / 2.0;
        assert!((layered.sample(x, y) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_octaves_is_zero() {
        let flat = Simplex4::new(1, NoiseOptions::default().with_octaves(Vec::new()));
        assert_eq!(flat.sample(1.0, 2.0, 3.0, 4.0), 0.0);
    }

    #[test]
    fn test_from_random_is_reproducible() {
        let mut a = Random::new("noise", Some("field"));
        let mut b = Random::new("noise", Some("field"));
        let fa = Simplex2::from_random(&mut a, NoiseOptions::default());
        let fb = Simplex2::from_random(&mut b, NoiseOptions::default());
        assert_eq!(fa.sample(0.5, 0.5), fb.sample(0.5, 0.5));
        assert_eq!(a.count(), 1);
    }
}
