//! CPU implementation of comparison operations.

use crate::error::Result;
use crate::ops::{CompareOp, CompareOps};
use crate::runtime::cpu::{helpers::compare_op_impl, CpuClient};
use crate::tensor::Tensor;

impl CompareOps for CpuClient {
    fn equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        compare_op_impl(CompareOp::Eq, a, b)
    }

    fn not_equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        compare_op_impl(CompareOp::Ne, a, b)
    }

    fn greater(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        compare_op_impl(CompareOp::Gt, a, b)
    }

    fn less(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        compare_op_impl(CompareOp::Lt, a, b)
    }

    fn greater_equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        compare_op_impl(CompareOp::Ge, a, b)
    }

    fn less_equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        compare_op_impl(CompareOp::Le, a, b)
    }
}
