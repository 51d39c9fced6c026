//! Random tensor generation
//!
//! Randomness comes from an explicit [`Generator`] owned by the caller rather
//! than process-wide state. Two generators built with the same seed produce
//! identical sequences, and independent generators can be used from
//! different threads without coordination.
//!
//! # Example
//!
//! ```
//! use tensr::prelude::*;
//!
//! let mut g1 = Generator::seeded(42);
//! let mut g2 = Generator::seeded(42);
//! let a = g1.randn(&[3, 3], DType::F64)?;
//! let b = g2.randn(&[3, 3], DType::F64)?;
//! assert_eq!(a.to_vec::<f64>()?, b.to_vec::<f64>()?);
//! # Ok::<(), tensr::error::Error>(())
//! ```

use crate::dispatch_float;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::Device;
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seeded source of random tensors
///
/// Sequences are reproducible for a given seed and a given version of the
/// underlying `rand` generator.
#[derive(Clone, Debug)]
pub struct Generator {
    rng: StdRng,
    seed: u64,
    device: Device,
}

impl Generator {
    /// Generator seeded from the system clock
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        tracing::debug!(seed, source = "clock", "creating random generator");
        Self::from_seed(seed)
    }

    /// Generator with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        tracing::debug!(seed, source = "explicit", "creating random generator");
        Self::from_seed(seed)
    }

    fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            device: Device::cpu(),
        }
    }

    /// Place generated tensors on `device`
    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// Restart the sequence from `seed`
    pub fn reseed(&mut self, seed: u64) {
        tracing::debug!(seed, "reseeding random generator");
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// The seed the current sequence started from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform samples in `[0, 1)`. Only float dtypes are supported.
    pub fn rand(&mut self, shape: &[usize], dtype: DType) -> Result<Tensor> {
        let out = Tensor::empty(shape, dtype, &self.device)?;
        let rng = &mut self.rng;
        dispatch_float!(dtype, T => {
            out.write_values::<T, _>(|o| o.iter_mut().for_each(|x| *x = rng.random::<T>()));
        }, "rand");
        Ok(out)
    }

    /// Standard normal samples via the Box-Muller transform
    ///
    /// Each pair of outputs consumes two uniforms; an odd trailing element
    /// discards the second value of its pair.
    pub fn randn(&mut self, shape: &[usize], dtype: DType) -> Result<Tensor> {
        let out = Tensor::empty(shape, dtype, &self.device)?;
        let rng = &mut self.rng;
        dispatch_float!(dtype, T => {
            out.write_values::<T, _>(|o| {
                for pair in o.chunks_mut(2) {
                    // 1 - u lies in (0, 1], keeping the logarithm finite
                    let u1 = 1.0 - rng.random::<f64>();
                    let u2 = rng.random::<f64>();
                    let r = (-2.0 * u1.ln()).sqrt();
                    let theta = 2.0 * std::f64::consts::PI * u2;
                    pair[0] = <T as Element>::from_f64(r * theta.cos());
                    if let Some(second) = pair.get_mut(1) {
                        *second = <T as Element>::from_f64(r * theta.sin());
                    }
                }
            });
        }, "randn");
        Ok(out)
    }

    /// Uniform int32 samples in `[low, high)`
    ///
    /// Sampling is unbiased: `random_range` rejects draws that would otherwise skew
    /// ranges that do not divide the generator's output space.
    pub fn randint(&mut self, low: i32, high: i32, shape: &[usize]) -> Result<Tensor> {
        if high <= low {
            return Err(Error::invalid_argument(
                "high",
                format!("empty range [{}, {})", low, high),
            ));
        }
        let out = Tensor::empty(shape, DType::I32, &self.device)?;
        let rng = &mut self.rng;
        out.write_values::<i32, _>(|o| {
            o.iter_mut().for_each(|x| *x = rng.random_range(low..high));
        });
        Ok(out)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Generator::seeded(42);
        let mut b = Generator::seeded(42);
        assert_eq!(
            a.rand(&[16], DType::F32).unwrap().to_vec::<f32>().unwrap(),
            b.rand(&[16], DType::F32).unwrap().to_vec::<f32>().unwrap()
        );
        assert_eq!(
            a.randint(-5, 5, &[16]).unwrap().to_vec::<i32>().unwrap(),
            b.randint(-5, 5, &[16]).unwrap().to_vec::<i32>().unwrap()
        );
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut g = Generator::seeded(7);
        let first = g.randn(&[5], DType::F64).unwrap().to_vec::<f64>().unwrap();
        g.reseed(7);
        let again = g.randn(&[5], DType::F64).unwrap().to_vec::<f64>().unwrap();
        assert_eq!(first, again);
        assert_eq!(g.seed(), 7);
    }

    #[test]
    fn test_rand_range() {
        let mut g = Generator::seeded(1);
        let v = g.rand(&[1000], DType::F64).unwrap().to_vec::<f64>().unwrap();
        assert!(v.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_randint_bounds_and_errors() {
        let mut g = Generator::seeded(3);
        let t = g.randint(2, 5, &[200]).unwrap();
        assert_eq!(t.dtype(), DType::I32);
        assert!(t.to_vec::<i32>().unwrap().iter().all(|&x| (2..5).contains(&x)));
        assert!(matches!(g.randint(5, 5, &[1]), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_float_only_distributions() {
        let mut g = Generator::seeded(0);
        assert!(matches!(
            g.rand(&[2], DType::I64),
            Err(Error::UnsupportedOperation { op: "rand", .. })
        ));
        assert!(matches!(
            g.randn(&[2], DType::Bool),
            Err(Error::UnsupportedOperation { op: "randn", .. })
        ));
    }

    #[test]
    fn test_randn_odd_length_moments() {
        let mut g = Generator::seeded(2024);
        let v = g.randn(&[10_001], DType::F64).unwrap().to_vec::<f64>().unwrap();
        let mean = v.iter().sum::<f64>() / v.len() as f64;
        let var = v.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / v.len() as f64;
        assert!(mean.abs() < 0.05);
        assert!((var - 1.0).abs() < 0.05);
    }
}
