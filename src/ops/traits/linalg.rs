//! Linear algebra operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Thin singular value decomposition `A = U diag(S) Vᵀ`
#[derive(Debug, Clone)]
pub struct SvdDecomposition {
    /// Left singular vectors `[m, k]`, `k = min(m, n)`
    pub u: Tensor,
    /// Singular values `[k]`, descending
    pub s: Tensor,
    /// Right singular vectors, transposed, `[k, n]`
    pub vt: Tensor,
}

/// Eigenvalues and eigenvectors of a square matrix
#[derive(Debug, Clone)]
pub struct EigenDecomposition {
    /// Eigenvalues `[n]`, ordered by magnitude, largest first
    pub values: Tensor,
    /// Unit-norm eigenvectors as columns `[n, n]`, matching `values`
    pub vectors: Tensor,
}

/// Linear algebra on 2-D tensors.
///
/// `dot` and `matmul` accept every numeric dtype. The factorizations work on
/// float32/float64 only (integers are `UnsupportedOperation`), require 2-D
/// input (`InvalidArgument` otherwise) and, for `inv`, `det`, `solve` and
/// `eig`, a square matrix (`ShapeMismatch` otherwise).
///
/// A pivot is treated as zero when it does not exceed
/// `singular_tolerance * n * eps * max|A|` (see
/// [`ClientConfig`](crate::runtime::cpu::ClientConfig)).
///
/// # Example
///
/// ```
/// use tensr::prelude::*;
///
/// let device = Device::cpu();
/// let client = CpuClient::new(device);
/// let a = Tensor::from_slice(&[4.0f64, 7.0, 2.0, 6.0], &[2, 2], &device)?;
///
/// let det = client.det(&a)?;
/// assert!((det.item::<f64>()? - 10.0).abs() < 1e-12);
///
/// let inv = client.inv(&a)?;
/// let eye = client.matmul(&a, &inv)?;
/// assert!((eye.get(&[0, 0])? - 1.0).abs() < 1e-12);
/// # Ok::<(), tensr::error::Error>(())
/// ```
pub trait LinalgOps {
    /// Inner product of two 1-D tensors of equal length; 0-dimensional result
    fn dot(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;

    /// Matrix product `[m, k] x [k, n] -> [m, n]`
    fn matmul(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;

    /// Matrix inverse. Singular input is `SingularMatrix`.
    fn inv(&self, a: &Tensor) -> Result<Tensor>;

    /// Determinant as a 0-dimensional tensor (0 for a singular matrix)
    fn det(&self, a: &Tensor) -> Result<Tensor>;

    /// Solve `A x = b` for `b` of shape `[n]` or `[n, k]`
    fn solve(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;

    /// Least-squares solution of `A x ≈ b` for `A` of shape `[m, n]`
    ///
    /// When `m < n` the minimum-norm solution is returned. Rank-deficient
    /// `A` is `SingularMatrix`.
    fn lstsq(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;

    /// Singular value decomposition (one-sided Jacobi)
    fn svd(&self, a: &Tensor) -> Result<SvdDecomposition>;

    /// Eigendecomposition
    ///
    /// Symmetric matrices use Jacobi rotations; other matrices use Hessenberg
    /// reduction and shifted QR. A matrix with complex eigenvalues is
    /// `InvalidArgument`. Exhausting the iteration budget is `NoConvergence`.
    fn eig(&self, a: &Tensor) -> Result<EigenDecomposition>;
}
