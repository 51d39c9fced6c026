//! CPU implementation of FFT operations.

use crate::error::Result;
use crate::ops::FftOps;
use crate::runtime::cpu::{
    helpers::{fft2_impl, fft_impl, FftInput},
    CpuClient,
};
use crate::tensor::Tensor;

impl FftOps for CpuClient {
    fn fft(&self, a: &Tensor, axis: usize) -> Result<Tensor> {
        fft_impl(a, FftInput::Real, axis, false, "fft")
    }

    fn ifft(&self, a: &Tensor, axis: usize) -> Result<Tensor> {
        fft_impl(a, FftInput::Complex, axis, true, "ifft")
    }

    fn fft2(&self, a: &Tensor) -> Result<Tensor> {
        fft2_impl(a, FftInput::Real, false, "fft2")
    }

    fn ifft2(&self, a: &Tensor) -> Result<Tensor> {
        fft2_impl(a, FftInput::Complex, true, "ifft2")
    }
}
