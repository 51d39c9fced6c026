//! Matrix multiplication kernels

use crate::dtype::Numeric;

/// Matrix multiplication: C = A @ B
///
/// Row-major `a` (m × k), `b` (k × n), `out` (m × n). Uses the i-k-j loop
/// order so the innermost loop streams rows of `b` and `out`.
pub fn matmul_kernel<T: Numeric>(a: &[T], b: &[T], out: &mut [T], m: usize, k: usize, n: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(out.len(), m * n);

    out.fill(T::zero());
    for i in 0..m {
        let out_row = &mut out[i * n..(i + 1) * n];
        for kk in 0..k {
            let a_ik = a[i * k + kk];
            let b_row = &b[kk * n..(kk + 1) * n];
            for (o, &b_kj) in out_row.iter_mut().zip(b_row.iter()) {
                *o = o.add_elem(a_ik.mul_elem(b_kj));
            }
        }
    }
}

/// Inner product of two equal-length vectors
pub fn dot_kernel<T: Numeric>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc.add_elem(x.mul_elem(y)))
}
