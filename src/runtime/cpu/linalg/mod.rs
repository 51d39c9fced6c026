//! CPU linear algebra
//!
//! Products (`dot`, `matmul`) run the generic kernels in the input dtype.
//! Factorizations load the matrix into an `f64` working buffer, run the
//! algorithms in [`decompositions`], [`svd`] and [`eig`], and cast the result
//! back to the input float dtype. Singularity thresholds use the machine
//! epsilon of the input dtype.

mod decompositions;
mod eig;
mod jacobi;
mod svd;

use super::kernels;
use super::CpuClient;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::ops::{EigenDecomposition, SvdDecomposition};
use crate::runtime::{validate_binary_dtypes, Device};
use crate::tensor::Tensor;
use crate::{dispatch_float, dispatch_numeric};
use decompositions::{pivot_tolerance, LuFactors};

/// Row-major f64 copy of a 2-D float tensor
struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    dtype: DType,
    eps: f64,
}

impl Matrix {
    fn load(a: &Tensor, op: &'static str) -> Result<Self> {
        if a.ndim() != 2 {
            return Err(Error::invalid_argument(
                "a",
                format!("'{}' expects a 2-D matrix, got shape {:?}", op, a.shape()),
            ));
        }
        let dtype = a.dtype();
        let (data, eps) = dispatch_float!(dtype, T => {
            let data = a.with_values::<T, _>(|v| v.iter().map(|&x| Element::to_f64(x)).collect());
            (data, <T as crate::dtype::Float>::epsilon_f64())
        }, op);
        Ok(Self {
            data,
            rows: a.shape()[0],
            cols: a.shape()[1],
            dtype,
            eps,
        })
    }

    fn load_square(a: &Tensor, op: &'static str) -> Result<Self> {
        let m = Self::load(a, op)?;
        if m.rows != m.cols {
            return Err(Error::shape_mismatch(&[m.rows, m.rows], a.shape()));
        }
        Ok(m)
    }

    fn pivot_tolerance(&self, client: &CpuClient) -> f64 {
        let n = self.rows.max(self.cols);
        pivot_tolerance(client.config.singular_tolerance, n, self.eps, &self.data)
    }
}

fn store(values: &[f64], shape: &[usize], dtype: DType, device: &Device) -> Result<Tensor> {
    let out = Tensor::empty(shape, dtype, device)?;
    dispatch_float!(dtype, T => {
        out.write_values::<T, _>(|o| {
            for (dst, &src) in o.iter_mut().zip(values.iter()) {
                *dst = <T as Element>::from_f64(src);
            }
        });
    }, "store");
    Ok(out)
}

/// Right-hand side of `solve`/`lstsq`: `[rows]` or `[rows, k]`
fn load_rhs(a: &Matrix, b: &Tensor, rows: usize, op: &'static str) -> Result<(Vec<f64>, usize)> {
    if b.dtype() != a.dtype {
        return Err(Error::DTypeMismatch {
            lhs: a.dtype,
            rhs: b.dtype(),
        });
    }
    let k = match b.shape() {
        [r] if *r == rows => 1,
        [r, k] if *r == rows => *k,
        other => return Err(Error::shape_mismatch(&[rows], other)),
    };
    let data = dispatch_float!(b.dtype(), T => {
        b.with_values::<T, _>(|v| v.iter().map(|&x| Element::to_f64(x)).collect())
    }, op);
    Ok((data, k))
}

fn rhs_shape(b: &Tensor, rows: usize, k: usize) -> Vec<usize> {
    if b.ndim() == 1 {
        vec![rows]
    } else {
        vec![rows, k]
    }
}

/// Inner product of two 1-D tensors, returned as a 0-dimensional tensor
pub fn dot_impl(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    if a.ndim() != 1 || b.ndim() != 1 || a.numel() != b.numel() {
        return Err(Error::shape_mismatch(a.shape(), b.shape()));
    }
    let dtype = validate_binary_dtypes(a, b)?;
    let out = Tensor::empty(&[], dtype, a.device())?;
    dispatch_numeric!(dtype, T => {
        let value = a.with_values::<T, _>(|av| {
            b.with_values::<T, _>(|bv| kernels::dot_kernel(av, bv))
        });
        out.write_values::<T, _>(|o| o[0] = value);
    }, "dot");
    Ok(out)
}

/// Matrix product of two 2-D tensors
pub fn matmul_impl(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    if a.ndim() != 2 || b.ndim() != 2 {
        return Err(Error::invalid_argument(
            "a",
            format!("matmul expects 2-D operands, got {:?} and {:?}", a.shape(), b.shape()),
        ));
    }
    let (m, k) = (a.shape()[0], a.shape()[1]);
    let n = b.shape()[1];
    if b.shape()[0] != k {
        return Err(Error::shape_mismatch(&[k, n], b.shape()));
    }
    let dtype = validate_binary_dtypes(a, b)?;

    let out = Tensor::empty(&[m, n], dtype, a.device())?;
    dispatch_numeric!(dtype, T => {
        a.with_values::<T, _>(|av| {
            b.with_values::<T, _>(|bv| {
                out.write_values::<T, _>(|ov| kernels::matmul_kernel(av, bv, ov, m, k, n))
            })
        });
    }, "matmul");
    Ok(out)
}

/// Matrix inverse (Gauss-Jordan with partial pivoting)
pub fn inv_impl(client: &CpuClient, a: &Tensor) -> Result<Tensor> {
    let m = Matrix::load_square(a, "inv")?;
    let tol = m.pivot_tolerance(client);
    let n = m.rows;
    let inv = decompositions::gauss_jordan_inverse(m.data, n, tol)
        .ok_or(Error::SingularMatrix { op: "inv" })?;
    store(&inv, &[n, n], m.dtype, a.device())
}

/// Determinant via LU; exactly zero for a matrix with a zero pivot column
pub fn det_impl(a: &Tensor) -> Result<Tensor> {
    let m = Matrix::load_square(a, "det")?;
    let n = m.rows;
    let det = decompositions::lu_factor(m.data, n, 0.0)
        .as_ref()
        .map_or(0.0, LuFactors::det);
    store(&[det], &[], m.dtype, a.device())
}

/// Solve `A X = B` for square nonsingular `A`
pub fn solve_impl(client: &CpuClient, a: &Tensor, b: &Tensor) -> Result<Tensor> {
    let m = Matrix::load_square(a, "solve")?;
    let n = m.rows;
    let (mut rhs, k) = load_rhs(&m, b, n, "solve")?;
    let tol = m.pivot_tolerance(client);
    let lu = decompositions::lu_factor(m.data, n, tol).ok_or(Error::SingularMatrix { op: "solve" })?;
    lu.solve_in_place(&mut rhs, k);
    store(&rhs, &rhs_shape(b, n, k), m.dtype, a.device())
}

/// Least-squares solution of `A X ≈ B` by Householder QR
///
/// Overdetermined and square systems minimize `‖AX - B‖`. Underdetermined
/// systems (`rows < cols`) return the minimum-norm solution, computed from
/// the QR factorization of `Aᵀ`. Rank-deficient `A` is `SingularMatrix`.
pub fn lstsq_impl(client: &CpuClient, a: &Tensor, b: &Tensor) -> Result<Tensor> {
    let m = Matrix::load(a, "lstsq")?;
    let (rows, cols) = (m.rows, m.cols);
    let (mut rhs, k) = load_rhs(&m, b, rows, "lstsq")?;
    let tol = m.pivot_tolerance(client);
    let full_rank = |r: &[f64], ld: usize, n: usize| (0..n).all(|i| r[i * ld + i].abs() > tol);

    let solution = if rows >= cols {
        let mut r = m.data;
        let reflectors = decompositions::householder_qr(&mut r, rows, cols);
        if !full_rank(&r, cols, cols) {
            return Err(Error::SingularMatrix { op: "lstsq" });
        }
        decompositions::apply_qt(&reflectors, &mut rhs, k);
        decompositions::solve_upper(&r, cols, cols, &mut rhs, k);
        rhs.truncate(cols * k);
        rhs
    } else {
        let mut at = vec![0.0; cols * rows];
        for i in 0..rows {
            for j in 0..cols {
                at[j * rows + i] = m.data[i * cols + j];
            }
        }
        let reflectors = decompositions::householder_qr(&mut at, cols, rows);
        if !full_rank(&at, rows, rows) {
            return Err(Error::SingularMatrix { op: "lstsq" });
        }
        decompositions::solve_upper_transposed(&at, rows, rows, &mut rhs, k);
        let mut x = vec![0.0; cols * k];
        x[..rows * k].copy_from_slice(&rhs);
        decompositions::apply_q(&reflectors, &mut x, k);
        x
    };

    store(&solution, &rhs_shape(b, cols, k), m.dtype, a.device())
}

/// Thin SVD `A = U diag(S) Vᵀ`
pub fn svd_impl(client: &CpuClient, a: &Tensor) -> Result<SvdDecomposition> {
    let m = Matrix::load(a, "svd")?;
    let (rows, cols) = (m.rows, m.cols);
    let k = rows.min(cols);
    let f = svd::jacobi_svd(&m.data, rows, cols, m.eps, client.config.max_jacobi_sweeps)?;
    Ok(SvdDecomposition {
        u: store(&f.u, &[rows, k], m.dtype, a.device())?,
        s: store(&f.s, &[k], m.dtype, a.device())?,
        vt: store(&f.vt, &[k, cols], m.dtype, a.device())?,
    })
}

/// Eigendecomposition of a square matrix with a real spectrum
pub fn eig_impl(client: &CpuClient, a: &Tensor) -> Result<EigenDecomposition> {
    let m = Matrix::load_square(a, "eig")?;
    let n = m.rows;
    let symmetric_tol = n as f64 * m.eps * decompositions::max_abs(&m.data);
    let f = if eig::is_symmetric(&m.data, n, symmetric_tol) {
        eig::symmetric_jacobi_eig(&m.data, n, m.eps, client.config.max_jacobi_sweeps)?
    } else {
        eig::general_eig(&m.data, n, m.eps, client.config.max_qr_iterations)?
    };
    Ok(EigenDecomposition {
        values: store(&f.values, &[n], m.dtype, a.device())?,
        vectors: store(&f.vectors, &[n, n], m.dtype, a.device())?,
    })
}
