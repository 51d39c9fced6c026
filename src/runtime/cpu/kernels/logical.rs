//! Logical operation kernels over bool bytes

use crate::ops::LogicalOp;

/// Element-wise logical AND / OR
pub fn logical_op_kernel(op: LogicalOp, a: &[u8], b: &[u8], out: &mut [u8]) {
    debug_assert!(a.len() == b.len() && a.len() == out.len());
    for ((&x, &y), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        let (x, y) = (x != 0, y != 0);
        *o = match op {
            LogicalOp::And => x && y,
            LogicalOp::Or => x || y,
        } as u8;
    }
}

/// Element-wise logical NOT
pub fn logical_not_kernel(a: &[u8], out: &mut [u8]) {
    for (&x, o) in a.iter().zip(out.iter_mut()) {
        *o = (x == 0) as u8;
    }
}
