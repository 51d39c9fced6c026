//! Binary operation kernels

use crate::dtype::Numeric;
use crate::error::{Error, Result};
use crate::ops::BinaryOp;

/// Element-wise binary kernel over equal-length slices
///
/// Integer division by zero is reported instead of trapping.
pub fn binary_op_kernel<T: Numeric>(op: BinaryOp, a: &[T], b: &[T], out: &mut [T]) -> Result<()> {
    debug_assert!(a.len() == b.len() && a.len() == out.len());
    let pairs = a.iter().zip(b.iter()).zip(out.iter_mut());
    match op {
        BinaryOp::Add => pairs.for_each(|((&x, &y), o)| *o = x.add_elem(y)),
        BinaryOp::Sub => pairs.for_each(|((&x, &y), o)| *o = x.sub_elem(y)),
        BinaryOp::Mul => pairs.for_each(|((&x, &y), o)| *o = x.mul_elem(y)),
        BinaryOp::Div => {
            for ((&x, &y), o) in pairs {
                *o = x
                    .div_elem(y)
                    .ok_or_else(|| Error::invalid_argument("b", "integer division by zero"))?;
            }
        }
    }
    Ok(())
}
