//! CPU implementation of unary operations.

use crate::error::Result;
use crate::ops::{UnaryOp, UnaryOps};
use crate::runtime::cpu::{
    helpers::{pow_impl, unary_op_impl},
    CpuClient,
};
use crate::tensor::Tensor;

impl UnaryOps for CpuClient {
    fn sqrt(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Sqrt, a)
    }

    fn exp(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Exp, a)
    }

    fn log(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Log, a)
    }

    fn sin(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Sin, a)
    }

    fn cos(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Cos, a)
    }

    fn tan(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Tan, a)
    }

    fn arcsin(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Arcsin, a)
    }

    fn arccos(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Arccos, a)
    }

    fn arctan(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Arctan, a)
    }

    fn abs(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Abs, a)
    }

    fn neg(&self, a: &Tensor) -> Result<Tensor> {
        unary_op_impl(UnaryOp::Neg, a)
    }

    fn pow(&self, a: &Tensor, exponent: f64) -> Result<Tensor> {
        pow_impl(a, exponent)
    }
}
