//! CPU implementation of reduction operations.

use crate::error::Result;
use crate::ops::{ReduceOp, ReduceOps};
use crate::runtime::cpu::{helpers::reduce_impl, CpuClient};
use crate::tensor::Tensor;

impl ReduceOps for CpuClient {
    fn sum(&self, a: &Tensor, axes: &[usize], keepdims: bool) -> Result<Tensor> {
        reduce_impl(ReduceOp::Sum, a, axes, keepdims)
    }

    fn mean(&self, a: &Tensor, axes: &[usize], keepdims: bool) -> Result<Tensor> {
        reduce_impl(ReduceOp::Mean, a, axes, keepdims)
    }

    fn max(&self, a: &Tensor, axes: &[usize], keepdims: bool) -> Result<Tensor> {
        reduce_impl(ReduceOp::Max, a, axes, keepdims)
    }

    fn min(&self, a: &Tensor, axes: &[usize], keepdims: bool) -> Result<Tensor> {
        reduce_impl(ReduceOp::Min, a, axes, keepdims)
    }
}
