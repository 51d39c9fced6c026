//! Sequence creation helpers for CPU tensors

use super::super::kernels;
use crate::dispatch_dtype;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::runtime::Device;
use crate::tensor::Tensor;

/// Number of elements produced by `arange(start, stop, step)`
///
/// `ceil((stop - start) / step)`, or zero when the range is empty.
pub fn arange_len(start: f64, stop: f64, step: f64) -> Result<usize> {
    if step == 0.0 || !step.is_finite() {
        return Err(Error::invalid_argument("step", "must be finite and non-zero"));
    }
    if !start.is_finite() || !stop.is_finite() {
        return Err(Error::invalid_argument("start/stop", "must be finite"));
    }
    let n = ((stop - start) / step).ceil();
    Ok(if n > 0.0 { n as usize } else { 0 })
}

/// Values `start, start + step, ...` strictly before `stop`
pub fn arange_impl(
    start: f64,
    stop: f64,
    step: f64,
    dtype: DType,
    device: &Device,
) -> Result<Tensor> {
    let len = arange_len(start, stop, step)?;
    let out = Tensor::empty(&[len], dtype, device)?;
    dispatch_dtype!(dtype, T => {
        out.write_values::<T, _>(|o| kernels::arange_kernel(o, start, step, dtype));
    }, "arange");
    Ok(out)
}

/// `num` evenly spaced values from `start` to `stop` inclusive
pub fn linspace_impl(
    start: f64,
    stop: f64,
    num: usize,
    dtype: DType,
    device: &Device,
) -> Result<Tensor> {
    let out = Tensor::empty(&[num], dtype, device)?;
    if num > 0 {
        dispatch_dtype!(dtype, T => {
            out.write_values::<T, _>(|o| kernels::linspace_kernel(o, start, stop, dtype));
        }, "linspace");
    }
    Ok(out)
}

/// `n x m` matrix with ones on the main diagonal
pub fn eye_impl(n: usize, m: Option<usize>, dtype: DType, device: &Device) -> Result<Tensor> {
    let m = m.unwrap_or(n);
    let out = Tensor::empty(&[n, m], dtype, device)?;
    dispatch_dtype!(dtype, T => {
        out.write_values::<T, _>(|o| kernels::eye_kernel(o, n, m));
    }, "eye");
    Ok(out)
}
