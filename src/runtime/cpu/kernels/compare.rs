//! Comparison kernels
//!
//! Results are written as bool bytes (0 or 1).

use crate::dtype::Element;
use crate::ops::CompareOp;

/// Element-wise comparison kernel
pub fn compare_op_kernel<T: Element>(op: CompareOp, a: &[T], b: &[T], out: &mut [u8]) {
    debug_assert!(a.len() == b.len() && a.len() == out.len());
    let f: fn(&T, &T) -> bool = match op {
        CompareOp::Eq => |x, y| x == y,
        CompareOp::Ne => |x, y| x != y,
        CompareOp::Gt => |x, y| x > y,
        CompareOp::Lt => |x, y| x < y,
        CompareOp::Ge => |x, y| x >= y,
        CompareOp::Le => |x, y| x <= y,
    };
    for ((x, y), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *o = f(x, y) as u8;
    }
}
