//! Eigendecomposition of real square matrices
//!
//! Symmetric input goes through two-sided cyclic Jacobi. Everything else is
//! reduced to upper Hessenberg form and driven to upper triangular (real
//! Schur) form by explicitly shifted QR with deflation; eigenvectors then come
//! from back-substitution on the triangular factor.

use super::decompositions::max_abs;
use super::jacobi::{self, JacobiRotation};
use crate::error::{Error, Result};

/// Eigenvalues and unit-norm eigenvectors (as columns, `n x n`), ordered by
/// eigenvalue magnitude, largest first
#[derive(Debug, Clone)]
pub struct EigFactors {
    /// Eigenvalues
    pub values: Vec<f64>,
    /// Column `j` is the eigenvector for `values[j]`
    pub vectors: Vec<f64>,
}

/// True if `a` equals its transpose within `tol`
pub fn is_symmetric(a: &[f64], n: usize, tol: f64) -> bool {
    (0..n).all(|i| ((i + 1)..n).all(|j| (a[i * n + j] - a[j * n + i]).abs() <= tol))
}

fn off_diagonal_norm(a: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            sum += 2.0 * a[i * n + j] * a[i * n + j];
        }
    }
    sum.sqrt()
}

fn sorted(values: Vec<f64>, vectors: Vec<f64>, n: usize) -> EigFactors {
    let order = jacobi::argsort_by_magnitude_desc(&values);
    EigFactors {
        values: order.iter().map(|&i| values[i]).collect(),
        vectors: jacobi::select_columns(&vectors, n, n, &order),
    }
}

/// Two-sided cyclic Jacobi for symmetric matrices
///
/// ```text
/// W = A, V = I
/// while off(W) > eps * ‖A‖_F:
///     for each pair (p, q), p < q, with W[p,q] != 0:
///         J = rotation zeroing W[p,q]
///         W = Jᵀ W J, V = V J
/// λ = diag(W), eigenvectors = columns of V
/// ```
pub fn symmetric_jacobi_eig(a: &[f64], n: usize, eps: f64, max_sweeps: usize) -> Result<EigFactors> {
    let mut w = a.to_vec();
    let mut v = jacobi::identity(n);
    let frobenius = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let tol = eps * frobenius;

    let mut sweeps = 0;
    while off_diagonal_norm(&w, n) > tol {
        if sweeps == max_sweeps {
            tracing::warn!(sweeps, n, "eig: jacobi sweep budget exhausted");
            return Err(Error::NoConvergence {
                op: "eig",
                iterations: sweeps,
            });
        }
        sweeps += 1;
        for p in 0..n {
            for q in (p + 1)..n {
                let a_pq = w[p * n + q];
                if a_pq == 0.0 {
                    continue;
                }
                let rot = JacobiRotation::compute(w[p * n + p], w[q * n + q], a_pq);
                jacobi::rotate_symmetric(&mut w, n, p, q, rot);
                jacobi::rotate_columns(&mut v, n, n, p, q, rot);
            }
        }
    }
    tracing::trace!(sweeps, n, "eig: jacobi converged");

    let values = (0..n).map(|i| w[i * n + i]).collect();
    Ok(sorted(values, v, n))
}

/// Householder reduction to upper Hessenberg form, accumulating the
/// similarity transform into `q`
fn hessenberg_reduction(h: &mut [f64], q: &mut [f64], n: usize) {
    for k in 0..n.saturating_sub(2) {
        let mut v: Vec<f64> = ((k + 1)..n).map(|i| h[i * n + k]).collect();
        let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm == 0.0 {
            continue;
        }

        let alpha = if v[0] >= 0.0 { -norm } else { norm };
        v[0] -= alpha;
        let v_norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if v_norm == 0.0 {
            continue;
        }
        for x in v.iter_mut() {
            *x /= v_norm;
        }

        // H <- P H with P = I - 2 v vᵀ on rows k+1..n
        for j in 0..n {
            let dot: f64 = v.iter().enumerate().map(|(i, vi)| vi * h[(k + 1 + i) * n + j]).sum();
            for (i, vi) in v.iter().enumerate() {
                h[(k + 1 + i) * n + j] -= 2.0 * vi * dot;
            }
        }

        // H <- H P and Q <- Q P on columns k+1..n
        for m in [&mut *h, &mut *q] {
            for i in 0..n {
                let dot: f64 = v.iter().enumerate().map(|(j, vj)| m[i * n + k + 1 + j] * vj).sum();
                for (j, vj) in v.iter().enumerate() {
                    m[i * n + k + 1 + j] -= 2.0 * dot * vj;
                }
            }
        }
    }
}

/// Eigenvalue of the 2x2 block closest to `d`, or `None` if the block's
/// eigenvalues are complex
fn wilkinson_shift(a: f64, b: f64, c: f64, d: f64) -> Option<f64> {
    let half = 0.5 * (a - d);
    let disc = half * half + b * c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let mid = 0.5 * (a + d);
    let (l1, l2) = (mid + root, mid - root);
    Some(if (l1 - d).abs() <= (l2 - d).abs() { l1 } else { l2 })
}

/// One explicitly shifted QR step on the active window `lo..=hi`
fn qr_step(h: &mut [f64], z: &mut [f64], n: usize, lo: usize, hi: usize, mu: f64) {
    for i in lo..=hi {
        h[i * n + i] -= mu;
    }

    let mut rotations = Vec::with_capacity(hi - lo);
    for i in lo..hi {
        let x = h[i * n + i];
        let y = h[(i + 1) * n + i];
        let r = x.hypot(y);
        let (c, s) = if r == 0.0 { (1.0, 0.0) } else { (x / r, y / r) };
        for j in i..n {
            let t1 = h[i * n + j];
            let t2 = h[(i + 1) * n + j];
            h[i * n + j] = c * t1 + s * t2;
            h[(i + 1) * n + j] = -s * t1 + c * t2;
        }
        rotations.push((c, s));
    }

    for (offset, &(c, s)) in rotations.iter().enumerate() {
        let i = lo + offset;
        for k in 0..=(i + 1) {
            let t1 = h[k * n + i];
            let t2 = h[k * n + i + 1];
            h[k * n + i] = c * t1 + s * t2;
            h[k * n + i + 1] = -s * t1 + c * t2;
        }
        for k in 0..n {
            let t1 = z[k * n + i];
            let t2 = z[k * n + i + 1];
            z[k * n + i] = c * t1 + s * t2;
            z[k * n + i + 1] = -s * t1 + c * t2;
        }
    }

    for i in lo..=hi {
        h[i * n + i] += mu;
    }
}

/// Eigendecomposition of a general (nonsymmetric) matrix with real spectrum
///
/// `max_iterations` bounds the QR steps spent isolating any one eigenvalue.
/// A complex-conjugate pair is reported as `InvalidArgument` since the
/// result must be real.
pub fn general_eig(a: &[f64], n: usize, eps: f64, max_iterations: usize) -> Result<EigFactors> {
    let mut h = a.to_vec();
    let mut z = jacobi::identity(n);
    hessenberg_reduction(&mut h, &mut z, n);
    let norm = max_abs(&h);

    let mut total = 0usize;
    let mut iterations = 0usize;
    let mut hi = n.saturating_sub(1);
    while hi > 0 {
        // Locate the start of the unreduced block ending at `hi`
        let mut lo = hi;
        while lo > 0 {
            let mut scale = h[(lo - 1) * n + lo - 1].abs() + h[lo * n + lo].abs();
            if scale == 0.0 {
                scale = norm;
            }
            if h[lo * n + lo - 1].abs() <= eps * scale {
                h[lo * n + lo - 1] = 0.0;
                break;
            }
            lo -= 1;
        }

        if lo == hi {
            hi -= 1;
            iterations = 0;
            continue;
        }

        let (p, q) = (hi - 1, hi);
        let shift = wilkinson_shift(h[p * n + p], h[p * n + q], h[q * n + p], h[q * n + q]);
        let mu = match shift {
            None if lo == p => {
                return Err(Error::invalid_argument(
                    "a",
                    "matrix has complex eigenvalues, which a real tensor cannot hold",
                ));
            }
            None => h[q * n + q],
            Some(_) if iterations > 0 && iterations % 10 == 0 => {
                // Exceptional shift to break cycles
                h[q * n + q] + h[q * n + p].abs()
            }
            Some(mu) => mu,
        };

        if iterations == max_iterations {
            tracing::warn!(iterations, n, hi, "eig: qr iteration budget exhausted");
            return Err(Error::NoConvergence {
                op: "eig",
                iterations: total,
            });
        }
        iterations += 1;
        total += 1;
        qr_step(&mut h, &mut z, n, lo, hi, mu);
    }
    tracing::trace!(iterations = total, n, "eig: qr converged");

    // Eigenvectors of the triangular factor, mapped back through Z
    let small = eps * norm.max(f64::MIN_POSITIVE);
    let values: Vec<f64> = (0..n).map(|i| h[i * n + i]).collect();
    let mut vectors = vec![0.0; n * n];
    let mut x = vec![0.0; n];
    for k in 0..n {
        x.fill(0.0);
        x[k] = 1.0;
        for i in (0..k).rev() {
            let sum: f64 = ((i + 1)..=k).map(|j| h[i * n + j] * x[j]).sum();
            let mut denom = h[i * n + i] - values[k];
            if denom.abs() < small {
                denom = small;
            }
            x[i] = -sum / denom;
        }

        let mut col: Vec<f64> = (0..n)
            .map(|r| (0..=k).map(|j| z[r * n + j] * x[j]).sum())
            .collect();
        let len = col.iter().map(|c| c * c).sum::<f64>().sqrt();
        if len > 0.0 {
            col.iter_mut().for_each(|c| *c /= len);
        }
        for (r, c) in col.into_iter().enumerate() {
            vectors[r * n + k] = c;
        }
    }

    Ok(sorted(values, vectors, n))
}
