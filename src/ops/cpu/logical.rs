//! CPU implementation of logical operations.

use crate::error::Result;
use crate::ops::{LogicalOp, LogicalOps};
use crate::runtime::cpu::{
    helpers::{logical_not_impl, logical_op_impl},
    CpuClient,
};
use crate::tensor::Tensor;

impl LogicalOps for CpuClient {
    fn logical_and(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        logical_op_impl(LogicalOp::And, a, b)
    }

    fn logical_or(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        logical_op_impl(LogicalOp::Or, a, b)
    }

    fn logical_not(&self, a: &Tensor) -> Result<Tensor> {
        logical_not_impl(a)
    }
}
