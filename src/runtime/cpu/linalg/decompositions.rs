//! LU, Gauss-Jordan and Householder QR on row-major `f64` buffers
//!
//! Functions here return `None` when a pivot falls to or below the caller's
//! tolerance; the tensor-level wrappers turn that into `SingularMatrix`.

/// LU factorization with partial pivoting: `P A = L U`
///
/// `lu` holds `U` on and above the diagonal and the unit-lower `L`
/// multipliers below it.
#[derive(Debug, Clone)]
pub struct LuFactors {
    /// Packed L and U factors (n x n)
    pub lu: Vec<f64>,
    /// Row swapped with row `i` at step `i`
    pub pivots: Vec<usize>,
    /// Number of actual row exchanges, giving `det(P) = (-1)^swaps`
    pub swaps: usize,
    /// Matrix order
    pub n: usize,
}

impl LuFactors {
    /// Determinant as the signed product of the `U` diagonal
    pub fn det(&self) -> f64 {
        let n = self.n;
        let product: f64 = (0..n).map(|i| self.lu[i * n + i]).product();
        if self.swaps % 2 == 0 {
            product
        } else {
            -product
        }
    }

    /// Solve `A X = B` in place for `B` with `k` right-hand-side columns
    pub fn solve_in_place(&self, b: &mut [f64], k: usize) {
        let n = self.n;
        debug_assert_eq!(b.len(), n * k);

        for (i, &p) in self.pivots.iter().enumerate() {
            if p != i {
                for c in 0..k {
                    b.swap(i * k + c, p * k + c);
                }
            }
        }

        // Forward substitution with unit-diagonal L
        for i in 1..n {
            for j in 0..i {
                let l = self.lu[i * n + j];
                if l != 0.0 {
                    for c in 0..k {
                        b[i * k + c] -= l * b[j * k + c];
                    }
                }
            }
        }

        // Backward substitution with U
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let u = self.lu[i * n + j];
                for c in 0..k {
                    b[i * k + c] -= u * b[j * k + c];
                }
            }
            let d = self.lu[i * n + i];
            for c in 0..k {
                b[i * k + c] /= d;
            }
        }
    }
}

/// Largest absolute entry, 0 for an empty matrix
pub fn max_abs(a: &[f64]) -> f64 {
    a.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
}

/// Pivot threshold `scale * n * eps * max|A|`
pub fn pivot_tolerance(scale: f64, n: usize, eps: f64, a: &[f64]) -> f64 {
    scale * n as f64 * eps * max_abs(a)
}

/// Doolittle LU with partial pivoting
pub fn lu_factor(mut lu: Vec<f64>, n: usize, tol: f64) -> Option<LuFactors> {
    debug_assert_eq!(lu.len(), n * n);
    let mut pivots = vec![0; n];
    let mut swaps = 0;

    for col in 0..n {
        let mut pivot_row = col;
        let mut max_val = lu[col * n + col].abs();
        for row in (col + 1)..n {
            let val = lu[row * n + col].abs();
            if val > max_val {
                max_val = val;
                pivot_row = row;
            }
        }

        if max_val <= tol {
            return None;
        }

        pivots[col] = pivot_row;
        if pivot_row != col {
            for j in 0..n {
                lu.swap(col * n + j, pivot_row * n + j);
            }
            swaps += 1;
        }

        let pivot = lu[col * n + col];
        for row in (col + 1)..n {
            let factor = lu[row * n + col] / pivot;
            lu[row * n + col] = factor;
            if factor != 0.0 {
                for j in (col + 1)..n {
                    lu[row * n + j] -= factor * lu[col * n + j];
                }
            }
        }
    }

    Some(LuFactors {
        lu,
        pivots,
        swaps,
        n,
    })
}

/// Inverse by Gauss-Jordan elimination on `[A | I]` with partial pivoting
pub fn gauss_jordan_inverse(mut a: Vec<f64>, n: usize, tol: f64) -> Option<Vec<f64>> {
    let mut inv = vec![0.0; n * n];
    for i in 0..n {
        inv[i * n + i] = 1.0;
    }

    for col in 0..n {
        let mut pivot_row = col;
        let mut max_val = a[col * n + col].abs();
        for row in (col + 1)..n {
            let val = a[row * n + col].abs();
            if val > max_val {
                max_val = val;
                pivot_row = row;
            }
        }
        if max_val <= tol {
            return None;
        }

        if pivot_row != col {
            for j in 0..n {
                a.swap(col * n + j, pivot_row * n + j);
                inv.swap(col * n + j, pivot_row * n + j);
            }
        }

        let pivot = a[col * n + col];
        for j in 0..n {
            a[col * n + j] /= pivot;
            inv[col * n + j] /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = a[row * n + col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                a[row * n + j] -= factor * a[col * n + j];
                inv[row * n + j] -= factor * inv[col * n + j];
            }
        }
    }

    Some(inv)
}

/// Householder QR of an `m x n` matrix with `m >= n`, in place
///
/// On return the upper triangle of `a` holds `R`. The returned reflectors
/// `v_j` (unit length, acting on rows `j..m`) satisfy
/// `Qᵀ = H_{n-1} ... H_1 H_0` with `H_j = I - 2 v_j v_jᵀ`. A zero column
/// produces an empty reflector (identity).
pub fn householder_qr(a: &mut [f64], m: usize, n: usize) -> Vec<Vec<f64>> {
    debug_assert!(m >= n);
    let mut reflectors = Vec::with_capacity(n);

    for j in 0..n {
        let norm = (j..m).map(|i| a[i * n + j] * a[i * n + j]).sum::<f64>().sqrt();
        if norm == 0.0 {
            reflectors.push(Vec::new());
            continue;
        }

        let x0 = a[j * n + j];
        let alpha = if x0 >= 0.0 { -norm } else { norm };

        let mut v: Vec<f64> = (j..m).map(|i| a[i * n + j]).collect();
        v[0] -= alpha;
        let v_norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if v_norm == 0.0 {
            reflectors.push(Vec::new());
            continue;
        }
        for x in v.iter_mut() {
            *x /= v_norm;
        }

        for c in j..n {
            let dot: f64 = v.iter().enumerate().map(|(i, vi)| vi * a[(j + i) * n + c]).sum();
            for (i, vi) in v.iter().enumerate() {
                a[(j + i) * n + c] -= 2.0 * vi * dot;
            }
        }
        // Column j below the diagonal is now zero up to rounding
        a[j * n + j] = alpha;
        for i in (j + 1)..m {
            a[i * n + j] = 0.0;
        }

        reflectors.push(v);
    }

    reflectors
}

fn apply_reflector(v: &[f64], offset: usize, b: &mut [f64], k: usize) {
    if v.is_empty() {
        return;
    }
    for c in 0..k {
        let dot: f64 = v.iter().enumerate().map(|(i, vi)| vi * b[(offset + i) * k + c]).sum();
        for (i, vi) in v.iter().enumerate() {
            b[(offset + i) * k + c] -= 2.0 * vi * dot;
        }
    }
}

/// `B <- Qᵀ B` for `B` with `k` columns
pub fn apply_qt(reflectors: &[Vec<f64>], b: &mut [f64], k: usize) {
    for (j, v) in reflectors.iter().enumerate() {
        apply_reflector(v, j, b, k);
    }
}

/// `B <- Q B` for `B` with `k` columns
pub fn apply_q(reflectors: &[Vec<f64>], b: &mut [f64], k: usize) {
    for (j, v) in reflectors.iter().enumerate().rev() {
        apply_reflector(v, j, b, k);
    }
}

/// Solve `R X = B` for the leading `n x n` upper triangle of `r`
/// (row stride `ld`); `B` has `k` columns and at least `n` rows
pub fn solve_upper(r: &[f64], ld: usize, n: usize, b: &mut [f64], k: usize) {
    for i in (0..n).rev() {
        for j in (i + 1)..n {
            let u = r[i * ld + j];
            for c in 0..k {
                b[i * k + c] -= u * b[j * k + c];
            }
        }
        let d = r[i * ld + i];
        for c in 0..k {
            b[i * k + c] /= d;
        }
    }
}

/// Solve `Rᵀ Y = B` for the leading `n x n` upper triangle of `r`
pub fn solve_upper_transposed(r: &[f64], ld: usize, n: usize, b: &mut [f64], k: usize) {
    for i in 0..n {
        for j in 0..i {
            let l = r[j * ld + i];
            for c in 0..k {
                b[i * k + c] -= l * b[j * k + c];
            }
        }
        let d = r[i * ld + i];
        for c in 0..k {
            b[i * k + c] /= d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matmul(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
        let mut out = vec![0.0; m * n];
        for i in 0..m {
            for p in 0..k {
                for j in 0..n {
                    out[i * n + j] += a[i * k + p] * b[p * n + j];
                }
            }
        }
        out
    }

    fn assert_close(a: &[f64], b: &[f64]) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-10, "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_lu_det_and_solve() {
        let a = vec![0.0, 2.0, 1.0, 1.0, 1.0, 0.0, 3.0, 0.0, 1.0];
        let lu = lu_factor(a.clone(), 3, 1e-12).unwrap();
        // det = 0*(1-0) - 2*(1-0) + 1*(0-3) = -5
        assert!((lu.det() + 5.0).abs() < 1e-12);

        let x = vec![1.0, -2.0, 3.0];
        let mut b = matmul(&a, &x, 3, 3, 1);
        lu.solve_in_place(&mut b, 1);
        assert_close(&b, &x);
    }

    #[test]
    fn test_lu_detects_singular() {
        let a = vec![1.0, 2.0, 2.0, 4.0];
        let tol = pivot_tolerance(1.0, 2, f64::EPSILON, &a);
        assert!(lu_factor(a, 2, tol).is_none());
    }

    #[test]
    fn test_gauss_jordan_inverse() {
        let a = vec![4.0, 7.0, 2.0, 6.0];
        let inv = gauss_jordan_inverse(a.clone(), 2, 1e-12).unwrap();
        assert_close(&inv, &[0.6, -0.7, -0.2, 0.4]);
        assert_close(&matmul(&a, &inv, 2, 2, 2), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_householder_qr_reconstructs() {
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut r = a.clone();
        let reflectors = householder_qr(&mut r, 3, 2);

        // Q R == A, with R embedded in a 3x2 buffer
        let mut qr = r.clone();
        apply_q(&reflectors, &mut qr, 2);
        assert_close(&qr, &a);

        // Qᵀ A == R
        let mut qta = a.clone();
        apply_qt(&reflectors, &mut qta, 2);
        assert_close(&qta, &r);
    }

    #[test]
    fn test_triangular_solves() {
        let r = vec![2.0, 1.0, 0.0, 4.0];
        let mut b = vec![5.0, 8.0];
        solve_upper(&r, 2, 2, &mut b, 1);
        assert_close(&b, &[1.5, 2.0]);

        let mut c = vec![2.0, 9.0];
        solve_upper_transposed(&r, 2, 2, &mut c, 1);
        assert_close(&c, &[1.0, 2.0]);
    }
}
