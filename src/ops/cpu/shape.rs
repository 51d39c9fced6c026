//! CPU implementation of shape operations.

use crate::error::Result;
use crate::ops::ShapeOps;
use crate::runtime::cpu::{
    helpers::{cat_impl, hstack_impl, stack_impl, vstack_impl},
    CpuClient,
};
use crate::tensor::Tensor;

impl ShapeOps for CpuClient {
    fn concat(&self, tensors: &[&Tensor], axis: usize) -> Result<Tensor> {
        cat_impl(tensors, axis)
    }

    fn stack(&self, tensors: &[&Tensor], axis: usize) -> Result<Tensor> {
        stack_impl(tensors, axis)
    }

    fn vstack(&self, tensors: &[&Tensor]) -> Result<Tensor> {
        vstack_impl(tensors)
    }

    fn hstack(&self, tensors: &[&Tensor]) -> Result<Tensor> {
        hstack_impl(tensors)
    }
}
