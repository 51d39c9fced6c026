//! Binary operation helpers for CPU tensors

use super::super::kernels;
use crate::dispatch_numeric;
use crate::error::Result;
use crate::ops::BinaryOp;
use crate::runtime::{validate_binary_dtypes, validate_same_size};
use crate::tensor::Tensor;

/// Helper for binary operations (add, sub, mul, div)
///
/// Operands must hold the same number of elements and share a dtype. The
/// output takes the shape, dtype and device of `a`.
pub fn binary_op_impl(op: BinaryOp, a: &Tensor, b: &Tensor) -> Result<Tensor> {
    validate_same_size(a, b)?;
    let dtype = validate_binary_dtypes(a, b)?;

    let out = Tensor::empty(a.shape(), dtype, a.device())?;

    dispatch_numeric!(dtype, T => {
        a.with_values::<T, _>(|av| {
            b.with_values::<T, _>(|bv| {
                out.write_values::<T, _>(|ov| kernels::binary_op_kernel(op, av, bv, ov))
            })
        })?;
    }, op.name());

    Ok(out)
}
