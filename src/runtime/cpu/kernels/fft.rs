//! FFT kernels
//!
//! Power-of-two lengths use the Stockham autosort radix-2 algorithm, which
//! needs no bit-reversal pass. Other lengths fall back to a direct DFT.
//!
//! # Algorithm: Stockham Radix-2 FFT
//!
//! ```text
//! For each stage s = 0..log2(N):
//!     half_m = 2^s
//!     m = 2^(s+1)
//!     For each group g = 0..(N/m):
//!         For each butterfly b = 0..half_m:
//!             twiddle = exp(sign * 2πi * b / m)
//!             even = src[g * half_m + b]
//!             odd = src[N/2 + g * half_m + b] * twiddle
//!             dst[g * m + b] = even + odd
//!             dst[g * m + b + half_m] = even - odd
//!     swap(src, dst)
//! ```

use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

/// Complex number with f64 components
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// Create a complex number
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `exp(i * theta)`
    #[inline]
    pub fn from_angle(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    #[inline]
    fn scale(self, s: f64) -> Self {
        Self::new(self.re * s, self.im * s)
    }
}

impl Add for Complex {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Transform `data` in place
///
/// `inverse` flips the twiddle sign and scales the result by `1/N`.
pub fn fft_kernel(data: &mut [Complex], inverse: bool) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    if n.is_power_of_two() {
        stockham_fft(data, inverse);
    } else {
        direct_dft(data, inverse);
    }

    if inverse {
        let scale = 1.0 / n as f64;
        for v in data.iter_mut() {
            *v = v.scale(scale);
        }
    }
}

/// Transform each contiguous row of length `n`
pub fn fft_batched_kernel(data: &mut [Complex], n: usize, inverse: bool) {
    if n == 0 {
        return;
    }
    for row in data.chunks_exact_mut(n) {
        fft_kernel(row, inverse);
    }
}

fn stockham_fft(data: &mut [Complex], inverse: bool) {
    let n = data.len();
    let log_n = n.trailing_zeros() as usize;
    let sign = if inverse { 1.0f64 } else { -1.0f64 };

    // Double buffering
    let mut buf_a: Vec<Complex> = data.to_vec();
    let mut buf_b: Vec<Complex> = vec![Complex::default(); n];
    let mut src = &mut buf_a;
    let mut dst = &mut buf_b;

    for stage in 0..log_n {
        let m = 1 << (stage + 1);
        let half_m = 1 << stage;
        let groups = n / m;

        for g in 0..groups {
            for b in 0..half_m {
                let theta = sign * 2.0 * PI * (b as f64) / (m as f64);
                let twiddle = Complex::from_angle(theta);

                let even = src[g * half_m + b];
                let odd = src[n / 2 + g * half_m + b] * twiddle;

                dst[g * m + b] = even + odd;
                dst[g * m + b + half_m] = even - odd;
            }
        }

        std::mem::swap(&mut src, &mut dst);
    }

    data.copy_from_slice(src);
}

fn direct_dft(data: &mut [Complex], inverse: bool) {
    let n = data.len();
    let sign = if inverse { 1.0f64 } else { -1.0f64 };
    let input = data.to_vec();
    for (k, out) in data.iter_mut().enumerate() {
        let mut acc = Complex::default();
        for (j, &x) in input.iter().enumerate() {
            // Reduce the index product mod n to keep the angle small
            let theta = sign * 2.0 * PI * ((k * j) % n) as f64 / n as f64;
            acc = acc + x * Complex::from_angle(theta);
        }
        *out = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[Complex], b: &[Complex]) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x.re - y.re).abs() < 1e-9, "{:?} vs {:?}", x, y);
            assert!((x.im - y.im).abs() < 1e-9, "{:?} vs {:?}", x, y);
        }
    }

    #[test]
    fn test_impulse_is_flat() {
        let mut data = vec![Complex::default(); 8];
        data[0] = Complex::new(1.0, 0.0);
        fft_kernel(&mut data, false);
        assert_close(&data, &[Complex::new(1.0, 0.0); 8]);
    }

    #[test]
    fn test_radix2_matches_dft() {
        let input: Vec<Complex> = (0..8)
            .map(|i| Complex::new(i as f64, (i * i) as f64 * 0.5))
            .collect();
        let mut fast = input.clone();
        fft_kernel(&mut fast, false);
        let mut slow = input.clone();
        direct_dft(&mut slow, false);
        assert_close(&fast, &slow);
    }

    #[test]
    fn test_round_trip_non_power_of_two() {
        let input: Vec<Complex> = (0..6).map(|i| Complex::new(i as f64, -1.0)).collect();
        let mut data = input.clone();
        fft_kernel(&mut data, false);
        fft_kernel(&mut data, true);
        assert_close(&data, &input);
    }

    #[test]
    fn test_known_spectrum() {
        // [1, 2, 3, 4] -> [10, -2+2i, -2, -2-2i]
        let mut data: Vec<Complex> = (1..=4).map(|i| Complex::new(i as f64, 0.0)).collect();
        fft_kernel(&mut data, false);
        assert_close(
            &data,
            &[
                Complex::new(10.0, 0.0),
                Complex::new(-2.0, 2.0),
                Complex::new(-2.0, 0.0),
                Complex::new(-2.0, -2.0),
            ],
        );
    }
}
