//! CPU implementation of binary operations.

use crate::error::Result;
use crate::ops::{BinaryOp, BinaryOps};
use crate::runtime::cpu::{helpers::binary_op_impl, CpuClient};
use crate::tensor::Tensor;

impl BinaryOps for CpuClient {
    fn add(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        binary_op_impl(BinaryOp::Add, a, b)
    }

    fn sub(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        binary_op_impl(BinaryOp::Sub, a, b)
    }

    fn mul(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        binary_op_impl(BinaryOp::Mul, a, b)
    }

    fn div(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        binary_op_impl(BinaryOp::Div, a, b)
    }
}
