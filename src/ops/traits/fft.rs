//! FFT operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Discrete Fourier transforms.
///
/// Complex tensors are float tensors whose last dimension is 2, holding
/// `(re, im)` pairs. Forward transforms take real float input; inverse
/// transforms take complex input and scale by `1/n`. Every result is complex
/// and keeps the input's float dtype. Power-of-two lengths use a radix-2
/// Stockham FFT, other lengths a direct DFT.
///
/// # Example
///
/// ```
/// use tensr::prelude::*;
///
/// let device = Device::cpu();
/// let client = CpuClient::new(device);
/// let x = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[4], &device)?;
///
/// let spectrum = client.fft(&x, 0)?; // shape [4, 2]
/// assert_eq!(spectrum.get(&[0, 0])?, 10.0);
///
/// let back = client.ifft(&spectrum, 0)?;
/// assert!((back.get(&[2, 0])? - 3.0).abs() < 1e-12);
/// # Ok::<(), tensr::error::Error>(())
/// ```
pub trait FftOps {
    /// Forward transform of a real tensor along `axis`
    fn fft(&self, a: &Tensor, axis: usize) -> Result<Tensor>;

    /// Inverse transform of a complex tensor along logical `axis`
    fn ifft(&self, a: &Tensor, axis: usize) -> Result<Tensor>;

    /// Forward 2-D transform of a real tensor over its last two axes
    fn fft2(&self, a: &Tensor) -> Result<Tensor>;

    /// Inverse 2-D transform of a complex tensor over its last two logical axes
    fn ifft2(&self, a: &Tensor) -> Result<Tensor>;
}
