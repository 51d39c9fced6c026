//! Unary operation helpers for CPU tensors

use super::super::kernels;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::ops::UnaryOp;
use crate::tensor::Tensor;
use crate::{dispatch_float, dispatch_numeric};

/// Helper for unary operations
///
/// Floating point dtypes support every operation. Integer dtypes support
/// `abs` and `neg` (wrapping; `neg` is undefined for uint8). Bool supports
/// none.
pub fn unary_op_impl(op: UnaryOp, a: &Tensor) -> Result<Tensor> {
    let dtype = a.dtype();
    let out = Tensor::empty(a.shape(), dtype, a.device())?;

    if dtype.is_float() {
        dispatch_float!(dtype, T => {
            a.with_values::<T, _>(|av| {
                out.write_values::<T, _>(|ov| kernels::unary_float_kernel(op, av, ov))
            });
        }, op.name());
        return Ok(out);
    }

    if !op.supports_integers() || (op == UnaryOp::Neg && dtype == DType::U8) {
        return Err(Error::unsupported(op.name(), dtype));
    }

    dispatch_numeric!(dtype, T => {
        let ok = a.with_values::<T, _>(|av| {
            out.write_values::<T, _>(|ov| match op {
                UnaryOp::Abs => {
                    kernels::abs_kernel(av, ov);
                    true
                }
                _ => kernels::neg_kernel(av, ov),
            })
        });
        if !ok {
            return Err(Error::unsupported(op.name(), dtype));
        }
    }, op.name());

    Ok(out)
}

/// Raise every element to `exponent` (floating point only)
pub fn pow_impl(a: &Tensor, exponent: f64) -> Result<Tensor> {
    let dtype = a.dtype();
    if !dtype.is_float() {
        return Err(Error::unsupported("pow", dtype));
    }
    let out = Tensor::empty(a.shape(), dtype, a.device())?;
    dispatch_float!(dtype, T => {
        let e = <T as Element>::from_f64(exponent);
        a.with_values::<T, _>(|av| out.write_values::<T, _>(|ov| kernels::pow_kernel(av, e, ov)));
    }, "pow");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Device;

    #[test]
    fn test_float_only_ops_reject_ints() {
        let a = Tensor::from_slice(&[4i32, 9], &[2], &Device::cpu()).unwrap();
        assert!(matches!(
            unary_op_impl(UnaryOp::Sqrt, &a).unwrap_err(),
            Error::UnsupportedOperation { op: "sqrt", .. }
        ));
        assert!(pow_impl(&a, 2.0).is_err());

        let abs = unary_op_impl(UnaryOp::Abs, &a).unwrap();
        assert_eq!(abs.to_vec::<i32>().unwrap(), vec![4, 9]);
    }

    #[test]
    fn test_neg_on_uint8_is_unsupported() {
        let a = Tensor::from_slice(&[0u8, 1, 2], &[3], &Device::cpu()).unwrap();
        let err = unary_op_impl(UnaryOp::Neg, &a).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedOperation {
                op: "neg",
                dtype: DType::U8
            }
        ));
        // Rejected from the dtype alone, even without elements
        let empty = Tensor::zeros(&[0], DType::U8, &Device::cpu()).unwrap();
        assert!(unary_op_impl(UnaryOp::Neg, &empty).is_err());
    }
}
