//! Unary operation kernels

use crate::dtype::{Float, Numeric};
use crate::ops::UnaryOp;

/// Element-wise unary kernel for floating point types
pub fn unary_float_kernel<T: Float>(op: UnaryOp, a: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), out.len());
    let f: fn(T) -> T = match op {
        UnaryOp::Neg => |x| -x,
        UnaryOp::Abs => |x| x.abs(),
        UnaryOp::Sqrt => |x| x.sqrt(),
        UnaryOp::Exp => |x| x.exp(),
        UnaryOp::Log => |x| x.ln(),
        UnaryOp::Sin => |x| x.sin(),
        UnaryOp::Cos => |x| x.cos(),
        UnaryOp::Tan => |x| x.tan(),
        UnaryOp::Arcsin => |x| x.asin(),
        UnaryOp::Arccos => |x| x.acos(),
        UnaryOp::Arctan => |x| x.atan(),
    };
    for (o, &x) in out.iter_mut().zip(a.iter()) {
        *o = f(x);
    }
}

/// `a ^ exponent` for floating point types
pub fn pow_kernel<T: Float>(a: &[T], exponent: T, out: &mut [T]) {
    debug_assert_eq!(a.len(), out.len());
    for (o, &x) in out.iter_mut().zip(a.iter()) {
        *o = x.powf(exponent);
    }
}

/// `abs` for any numeric type (wrapping for signed integers)
pub fn abs_kernel<T: Numeric>(a: &[T], out: &mut [T]) {
    for (o, &x) in out.iter_mut().zip(a.iter()) {
        *o = x.abs_elem();
    }
}

/// `neg` for any numeric type; returns false if the type has no negation
pub fn neg_kernel<T: Numeric>(a: &[T], out: &mut [T]) -> bool {
    for (o, &x) in out.iter_mut().zip(a.iter()) {
        match x.neg_elem() {
            Some(v) => *o = v,
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_float() {
        let a = [0.0f64, 1.0];
        let mut out = [0.0f64; 2];
        unary_float_kernel(UnaryOp::Exp, &a, &mut out);
        assert_eq!(out[0], 1.0);
        assert!((out[1] - std::f64::consts::E).abs() < 1e-12);

        unary_float_kernel(UnaryOp::Arccos, &a, &mut out);
        assert!((out[0] - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn test_pow() {
        let mut out = [0.0f32; 3];
        pow_kernel(&[1.0f32, 2.0, 3.0], 2.0, &mut out);
        assert_eq!(out, [1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_integer_abs_neg() {
        let mut out = [0i64; 2];
        abs_kernel(&[-5i64, 5], &mut out);
        assert_eq!(out, [5, 5]);
        assert!(neg_kernel(&[-5i64, 5], &mut out));
        assert_eq!(out, [5, -5]);

        let mut bytes = [0u8; 1];
        assert!(!neg_kernel(&[3u8], &mut bytes));
    }
}
