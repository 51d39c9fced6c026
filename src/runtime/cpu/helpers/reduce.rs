//! Reduction operation helpers for CPU tensors
//!
//! Any subset of axes is reduced in one pass: the input is viewed with the
//! kept axes first and the reduced axes last, so that the logical element
//! order becomes `outer_size` rows of `reduce_size` values.

use super::super::kernels;
use crate::dispatch_numeric;
use crate::dtype::{DType, DTypeSet};
use crate::error::{Error, Result};
use crate::ops::{normalize_axes, reduce_output_shape, ReduceOp};
use crate::tensor::Tensor;

/// Reduce implementation (sum, mean, max, min)
///
/// An empty `axes` slice reduces over every axis, producing a 0-dimensional
/// tensor (or an all-ones shape with `keepdims`).
pub fn reduce_impl(op: ReduceOp, a: &Tensor, axes: &[usize], keepdims: bool) -> Result<Tensor> {
    let dtype = a.dtype();
    DTypeSet::NUMERIC.require(dtype, op.name())?;

    let shape = a.shape();
    let axes = normalize_axes(a.ndim(), axes)?;
    let kept: Vec<usize> = (0..a.ndim()).filter(|d| !axes.contains(d)).collect();

    let reduce_size: usize = axes.iter().map(|&d| shape[d]).product();
    let outer_size: usize = kept.iter().map(|&d| shape[d]).product();
    if reduce_size == 0 && matches!(op, ReduceOp::Max | ReduceOp::Min) {
        return Err(Error::invalid_argument(
            "a",
            format!("'{}' of an empty selection is undefined", op.name()),
        ));
    }

    let perm: Vec<usize> = kept.iter().chain(axes.iter()).copied().collect();
    let rows = a.permute(&perm)?;

    let out_shape = reduce_output_shape(shape, &axes, keepdims);
    let out = Tensor::empty(&out_shape, dtype, a.device())?;

    dispatch_numeric!(dtype, T => {
        rows.with_values::<T, _>(|av| {
            out.write_values::<T, _>(|ov| {
                kernels::reduce_kernel(op, av, ov, reduce_size, outer_size)
            })
        });
    }, op.name());

    Ok(out)
}

/// Argmax / argmin implementation
///
/// `axis = None` searches the flattened tensor and returns a 0-dimensional
/// index; otherwise the axis is removed from the shape. Indices are int64
/// and ties resolve to the first occurrence in iteration order.
pub fn arg_reduce_impl(
    a: &Tensor,
    axis: Option<usize>,
    find_max: bool,
    op_name: &'static str,
) -> Result<Tensor> {
    let dtype = a.dtype();
    DTypeSet::NUMERIC.require(dtype, op_name)?;

    let (rows, reduce_size, out_shape) = match axis {
        None => (a.clone(), a.numel(), Vec::new()),
        Some(axis) => {
            a.check_axis(axis)?;
            let mut perm: Vec<usize> = (0..a.ndim()).filter(|&d| d != axis).collect();
            let out_shape: Vec<usize> = perm.iter().map(|&d| a.shape()[d]).collect();
            perm.push(axis);
            (a.permute(&perm)?, a.shape()[axis], out_shape)
        }
    };

    if reduce_size == 0 {
        return Err(Error::invalid_argument(
            "a",
            format!("'{}' of an empty selection is undefined", op_name),
        ));
    }

    let out = Tensor::empty(&out_shape, DType::I64, a.device())?;

    dispatch_numeric!(dtype, T => {
        rows.with_values::<T, _>(|av| {
            out.write_values::<i64, _>(|ov| {
                kernels::arg_reduce_kernel(av, ov, reduce_size, find_max)
            })
        });
    }, op_name);

    Ok(out)
}
