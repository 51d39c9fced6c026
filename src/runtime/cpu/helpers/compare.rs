//! Comparison and logical operation helpers for CPU tensors

use super::super::kernels;
use crate::dispatch_dtype;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::ops::{CompareOp, LogicalOp};
use crate::runtime::{validate_binary_dtypes, validate_same_size};
use crate::tensor::Tensor;

/// Helper for comparison operations; the result is a bool tensor shaped like `a`
pub fn compare_op_impl(op: CompareOp, a: &Tensor, b: &Tensor) -> Result<Tensor> {
    validate_same_size(a, b)?;
    let dtype = validate_binary_dtypes(a, b)?;

    let out = Tensor::empty(a.shape(), DType::Bool, a.device())?;

    dispatch_dtype!(dtype, T => {
        a.with_values::<T, _>(|av| {
            b.with_values::<T, _>(|bv| {
                out.write_values::<u8, _>(|ov| kernels::compare_op_kernel(op, av, bv, ov))
            })
        });
    }, op.name());

    Ok(out)
}

fn require_bool(t: &Tensor, op: &'static str) -> Result<()> {
    if t.dtype() == DType::Bool {
        Ok(())
    } else {
        Err(Error::unsupported(op, t.dtype()))
    }
}

/// Helper for logical AND / OR over bool tensors
pub fn logical_op_impl(op: LogicalOp, a: &Tensor, b: &Tensor) -> Result<Tensor> {
    let name = match op {
        LogicalOp::And => "logical_and",
        LogicalOp::Or => "logical_or",
    };
    require_bool(a, name)?;
    require_bool(b, name)?;
    validate_same_size(a, b)?;

    let out = Tensor::empty(a.shape(), DType::Bool, a.device())?;
    a.with_values::<u8, _>(|av| {
        b.with_values::<u8, _>(|bv| {
            out.write_values::<u8, _>(|ov| kernels::logical_op_kernel(op, av, bv, ov))
        })
    });
    Ok(out)
}

/// Helper for logical NOT over a bool tensor
pub fn logical_not_impl(a: &Tensor) -> Result<Tensor> {
    require_bool(a, "logical_not")?;
    let out = Tensor::empty(a.shape(), DType::Bool, a.device())?;
    a.with_values::<u8, _>(|av| out.write_values::<u8, _>(|ov| kernels::logical_not_kernel(av, ov)));
    Ok(out)
}
