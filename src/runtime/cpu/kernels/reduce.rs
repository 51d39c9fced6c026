//! Reduction operation kernels
//!
//! Input is laid out as `outer_size` rows of `reduce_size` contiguous
//! elements; each row reduces to one output element.

use crate::dtype::Numeric;
use crate::ops::ReduceOp;

/// Reduce each row of a `[outer_size, reduce_size]` block
///
/// `Sum` accumulates in the element type (wrapping for integers). `Mean`
/// accumulates in f64 and casts back with truncation. `Max`/`Min` require
/// `reduce_size > 0`; NaN propagates.
pub fn reduce_kernel<T: Numeric>(
    op: ReduceOp,
    a: &[T],
    out: &mut [T],
    reduce_size: usize,
    outer_size: usize,
) {
    debug_assert_eq!(a.len(), reduce_size * outer_size);
    debug_assert_eq!(out.len(), outer_size);

    if reduce_size == 0 {
        if matches!(op, ReduceOp::Sum) {
            out.fill(T::zero());
        } else {
            out.fill(T::from_f64(f64::NAN));
        }
        return;
    }

    for (row, o) in a.chunks_exact(reduce_size).zip(out.iter_mut()) {
        *o = match op {
            ReduceOp::Sum => row.iter().fold(T::zero(), |acc, &x| acc.add_elem(x)),
            ReduceOp::Mean => {
                let sum: f64 = row.iter().map(|&x| x.to_f64()).sum();
                T::from_f64(sum / reduce_size as f64)
            }
            ReduceOp::Max => row[1..].iter().fold(row[0], |acc, &x| {
                if x > acc || is_nan(x) {
                    x
                } else {
                    acc
                }
            }),
            ReduceOp::Min => row[1..].iter().fold(row[0], |acc, &x| {
                if x < acc || is_nan(x) {
                    x
                } else {
                    acc
                }
            }),
        };
    }
}

#[inline]
fn is_nan<T: PartialOrd>(x: T) -> bool {
    x.partial_cmp(&x).is_none()
}

/// Index of the extreme element of each row, first occurrence on ties
///
/// `find_max` selects argmax, otherwise argmin. Rows must be non-empty.
/// NaN counts as the extreme in both directions, so the first NaN of a row
/// wins, matching the NaN that `Max`/`Min` return for the same row.
pub fn arg_reduce_kernel<T: Numeric>(
    a: &[T],
    out: &mut [i64],
    reduce_size: usize,
    find_max: bool,
) {
    debug_assert!(reduce_size > 0);
    for (row, o) in a.chunks_exact(reduce_size).zip(out.iter_mut()) {
        let mut best = 0usize;
        for (i, &x) in row.iter().enumerate().skip(1) {
            if is_nan(row[best]) {
                break;
            }
            let better = is_nan(x) || (if find_max { x > row[best] } else { x < row[best] });
            if better {
                best = i;
            }
        }
        *o = best as i64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_rows() {
        let a = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut out = [0.0f32; 2];
        reduce_kernel(ReduceOp::Sum, &a, &mut out, 3, 2);
        assert_eq!(out, [6.0, 15.0]);
        reduce_kernel(ReduceOp::Mean, &a, &mut out, 3, 2);
        assert_eq!(out, [2.0, 5.0]);
        reduce_kernel(ReduceOp::Max, &a, &mut out, 3, 2);
        assert_eq!(out, [3.0, 6.0]);
        reduce_kernel(ReduceOp::Min, &a, &mut out, 3, 2);
        assert_eq!(out, [1.0, 4.0]);
    }

    #[test]
    fn test_integer_mean_truncates() {
        let mut out = [0i32; 1];
        reduce_kernel(ReduceOp::Mean, &[1, 2], &mut out, 2, 1);
        assert_eq!(out, [1]);
    }

    #[test]
    fn test_arg_reduce_first_occurrence() {
        let a = [3i32, 7, 7, 1, 1, 0];
        let mut out = [0i64; 1];
        arg_reduce_kernel(&a, &mut out, 6, true);
        assert_eq!(out, [1]);

        let b = [2i32, 1, 1];
        arg_reduce_kernel(&b, &mut out, 3, false);
        assert_eq!(out, [1]);
    }

    #[test]
    fn test_arg_reduce_picks_first_nan() {
        let a = [1.0f64, f64::NAN, 3.0, f64::NAN, -1.0, 5.0];
        let mut out = [0i64; 2];
        arg_reduce_kernel(&a, &mut out, 3, true);
        assert_eq!(out, [1, 0]);
        arg_reduce_kernel(&a, &mut out, 3, false);
        assert_eq!(out, [1, 0]);

        let b = [f64::NAN, 2.0, f64::NAN];
        arg_reduce_kernel(&b, &mut out[..1], 3, true);
        assert_eq!(out[0], 0);
    }
}
