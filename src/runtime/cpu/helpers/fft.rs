//! FFT helpers for CPU tensors
//!
//! Complex values are represented as floating point tensors whose last
//! dimension has size 2 holding `(re, im)`. Transforms compute in f64 and
//! write back in the input dtype.

use super::super::kernels::{self, Complex};
use crate::dispatch_float;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// How the input tensor encodes its values
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FftInput {
    /// Real values; the transform axes are the trailing axes
    Real,
    /// Complex layout `[..., 2]`; the transform axes precede the final pair axis
    Complex,
}

/// Load `a` into a complex buffer, returning it with the logical shape
fn load_complex(a: &Tensor, input: FftInput, min_axes: usize, op: &'static str) -> Result<(Vec<Complex>, Vec<usize>)> {
    let dtype = a.dtype();
    let values: Vec<f64> = dispatch_float!(dtype, T => {
        a.with_values::<T, _>(|v| v.iter().map(|&x| Element::to_f64(x)).collect())
    }, op);

    match input {
        FftInput::Real => {
            if a.ndim() < min_axes {
                return Err(Error::InvalidAxis {
                    axis: min_axes - 1,
                    ndim: a.ndim(),
                });
            }
            let buf = values.into_iter().map(|re| Complex::new(re, 0.0)).collect();
            Ok((buf, a.shape().to_vec()))
        }
        FftInput::Complex => {
            let shape = a.shape();
            if shape.len() < min_axes + 1 || shape[shape.len() - 1] != 2 {
                let mut expected = vec![1; min_axes];
                expected.push(2);
                return Err(Error::shape_mismatch(&expected, shape));
            }
            let buf = values
                .chunks_exact(2)
                .map(|p| Complex::new(p[0], p[1]))
                .collect();
            Ok((buf, shape[..shape.len() - 1].to_vec()))
        }
    }
}

/// Write a complex buffer back as a `[..., 2]` tensor of `like`'s dtype
fn store_complex(like: &Tensor, buf: &[Complex], logical_shape: &[usize], op: &'static str) -> Result<Tensor> {
    let mut shape = logical_shape.to_vec();
    shape.push(2);
    let dtype = like.dtype();
    let out = Tensor::empty(&shape, dtype, like.device())?;
    dispatch_float!(dtype, T => {
        out.write_values::<T, _>(|o| {
            for (pair, c) in o.chunks_exact_mut(2).zip(buf.iter()) {
                pair[0] = <T as Element>::from_f64(c.re);
                pair[1] = <T as Element>::from_f64(c.im);
            }
        });
    }, op);
    Ok(out)
}

/// 1-D transform along logical `axis`
///
/// The output is complex layout with the transformed axis in its original
/// position.
pub fn fft_impl(
    a: &Tensor,
    input: FftInput,
    axis: usize,
    inverse: bool,
    op: &'static str,
) -> Result<Tensor> {
    let logical_ndim = match input {
        FftInput::Real => a.ndim(),
        FftInput::Complex => a.ndim().saturating_sub(1),
    };
    if axis >= logical_ndim {
        return Err(Error::InvalidAxis {
            axis,
            ndim: logical_ndim,
        });
    }

    // Move `axis` to the last logical position
    let mut perm: Vec<usize> = (0..a.ndim()).filter(|&d| d != axis).collect();
    perm.insert(logical_ndim - 1, axis);
    let moved = a.permute(&perm)?;

    let (mut buf, shape) = load_complex(&moved, input, 1, op)?;
    let n = shape[shape.len() - 1];
    kernels::fft_batched_kernel(&mut buf, n, inverse);
    let out = store_complex(a, &buf, &shape, op)?;

    if axis == logical_ndim - 1 {
        return Ok(out);
    }
    let mut back: Vec<usize> = (0..logical_ndim - 1).collect();
    back.insert(axis, logical_ndim - 1);
    back.push(logical_ndim);
    out.permute(&back)?.contiguous()
}

/// 2-D transform over the last two logical axes
pub fn fft2_impl(a: &Tensor, input: FftInput, inverse: bool, op: &'static str) -> Result<Tensor> {
    let (mut buf, shape) = load_complex(a, input, 2, op)?;
    let h = shape[shape.len() - 2];
    let w = shape[shape.len() - 1];

    // Rows
    kernels::fft_batched_kernel(&mut buf, w, inverse);

    // Columns
    if h > 0 && w > 0 {
        let mut column = vec![Complex::default(); h];
        for plane in buf.chunks_exact_mut(h * w) {
            for j in 0..w {
                for (i, c) in column.iter_mut().enumerate() {
                    *c = plane[i * w + j];
                }
                kernels::fft_kernel(&mut column, inverse);
                for (i, c) in column.iter().enumerate() {
                    plane[i * w + j] = *c;
                }
            }
        }
    }

    store_complex(a, &buf, &shape, op)
}
