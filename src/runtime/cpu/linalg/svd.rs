//! Singular value decomposition by one-sided Jacobi

use super::jacobi::{self, JacobiRotation};
use crate::error::{Error, Result};

/// Thin SVD factors of an `m x n` matrix, `k = min(m, n)`
#[derive(Debug, Clone)]
pub struct SvdFactors {
    /// Left singular vectors, `m x k`
    pub u: Vec<f64>,
    /// Singular values, descending, length `k`
    pub s: Vec<f64>,
    /// Right singular vectors transposed, `k x n`
    pub vt: Vec<f64>,
}

/// One-sided Jacobi SVD
///
/// ```text
/// if m < n: factor Aᵀ and swap U <-> V
/// B = A, V = I
/// repeat (at most max_sweeps):
///     for each column pair (p, q), p < q:
///         (a_pp, a_qq, a_pq) = Gram entries of B[:,p], B[:,q]
///         if |a_pq| > rows * eps * sqrt(a_pp * a_qq): rotate B and V columns
///     stop when a sweep applies no rotation
/// S[j] = ‖B[:,j]‖, U[:,j] = B[:,j] / S[j]
/// sort by S descending
/// ```
pub fn jacobi_svd(a: &[f64], m: usize, n: usize, eps: f64, max_sweeps: usize) -> Result<SvdFactors> {
    let k = m.min(n);
    if k == 0 {
        return Ok(SvdFactors {
            u: vec![0.0; m * k],
            s: Vec::new(),
            vt: vec![0.0; k * n],
        });
    }

    let transpose = m < n;
    let (rows, cols) = if transpose { (n, m) } else { (m, n) };
    let mut b: Vec<f64> = if transpose {
        let mut t = vec![0.0; rows * cols];
        for i in 0..m {
            for j in 0..n {
                t[j * cols + i] = a[i * n + j];
            }
        }
        t
    } else {
        a.to_vec()
    };
    let mut v = jacobi::identity(cols);
    let tol = rows as f64 * eps;

    let mut converged = false;
    let mut sweeps = 0;
    while sweeps < max_sweeps {
        sweeps += 1;
        let mut rotated = false;
        for p in 0..cols {
            for q in (p + 1)..cols {
                let (a_pp, a_qq, a_pq) = jacobi::gram_elements(&b, rows, cols, p, q);
                if a_pq.abs() <= tol * (a_pp * a_qq).sqrt() {
                    continue;
                }
                let rot = JacobiRotation::compute(a_pp, a_qq, a_pq);
                jacobi::rotate_columns(&mut b, rows, cols, p, q, rot);
                jacobi::rotate_columns(&mut v, cols, cols, p, q, rot);
                rotated = true;
            }
        }
        if !rotated {
            converged = true;
            break;
        }
    }

    if !converged {
        tracing::warn!(sweeps, rows, cols, "svd: jacobi sweep budget exhausted");
        return Err(Error::NoConvergence {
            op: "svd",
            iterations: sweeps,
        });
    }
    tracing::trace!(sweeps, rows, cols, "svd: jacobi converged");

    // Column norms are the singular values
    let mut norms = vec![0.0; cols];
    for (j, norm) in norms.iter_mut().enumerate() {
        *norm = (0..rows).map(|i| b[i * cols + j] * b[i * cols + j]).sum::<f64>().sqrt();
        if *norm > 0.0 {
            for i in 0..rows {
                b[i * cols + j] /= *norm;
            }
        }
    }

    let order: Vec<usize> = jacobi::argsort_by_magnitude_desc(&norms)
        .into_iter()
        .take(k)
        .collect();
    let s: Vec<f64> = order.iter().map(|&j| norms[j]).collect();
    let mut left = jacobi::select_columns(&b, rows, cols, &order);
    let right = jacobi::select_columns(&v, cols, cols, &order);
    complete_zero_columns(&mut left, rows, k);

    // left: rows x k, right: cols x k
    if transpose {
        // A = (B S Vᵀ)ᵀ = V S Bᵀ
        Ok(SvdFactors {
            u: right,
            s,
            vt: transpose_matrix(&left, rows, k),
        })
    } else {
        Ok(SvdFactors {
            u: left,
            s,
            vt: transpose_matrix(&right, cols, k),
        })
    }
}

fn transpose_matrix(data: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    let mut out = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            out[j * rows + i] = data[i * cols + j];
        }
    }
    out
}

/// Replace zero columns (zero singular values) with unit vectors orthogonal
/// to the previous columns, keeping `U` orthonormal
fn complete_zero_columns(u: &mut [f64], rows: usize, k: usize) {
    for j in 0..k {
        let norm_sq: f64 = (0..rows).map(|i| u[i * k + j] * u[i * k + j]).sum();
        if norm_sq > 0.5 {
            continue;
        }
        for e in 0..rows {
            // Gram-Schmidt the standard basis vector e against columns < j
            let mut cand = vec![0.0; rows];
            cand[e] = 1.0;
            for c in 0..k {
                if c == j {
                    continue;
                }
                let dot: f64 = (0..rows).map(|i| u[i * k + c] * cand[i]).sum();
                for (i, x) in cand.iter_mut().enumerate() {
                    *x -= dot * u[i * k + c];
                }
            }
            let norm = cand.iter().map(|x| x * x).sum::<f64>().sqrt();
            if norm > 1e-8 {
                for (i, x) in cand.iter().enumerate() {
                    u[i * k + j] = x / norm;
                }
                break;
            }
        }
    }
}
