//! CPU implementation of linear algebra operations.

use crate::error::Result;
use crate::ops::{EigenDecomposition, LinalgOps, SvdDecomposition};
use crate::runtime::cpu::{linalg, CpuClient};
use crate::tensor::Tensor;

impl LinalgOps for CpuClient {
    fn dot(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        linalg::dot_impl(a, b)
    }

    fn matmul(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        linalg::matmul_impl(a, b)
    }

    fn inv(&self, a: &Tensor) -> Result<Tensor> {
        linalg::inv_impl(self, a)
    }

    fn det(&self, a: &Tensor) -> Result<Tensor> {
        linalg::det_impl(a)
    }

    fn solve(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        linalg::solve_impl(self, a, b)
    }

    fn lstsq(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        linalg::lstsq_impl(self, a, b)
    }

    fn svd(&self, a: &Tensor) -> Result<SvdDecomposition> {
        linalg::svd_impl(self, a)
    }

    fn eig(&self, a: &Tensor) -> Result<EigenDecomposition> {
        linalg::eig_impl(self, a)
    }
}
