//! CPU implementation of index-producing operations.

use crate::error::Result;
use crate::ops::IndexingOps;
use crate::runtime::cpu::{helpers::arg_reduce_impl, CpuClient};
use crate::tensor::Tensor;

impl IndexingOps for CpuClient {
    fn argmax(&self, a: &Tensor, axis: Option<usize>) -> Result<Tensor> {
        arg_reduce_impl(a, axis, true, "argmax")
    }

    fn argmin(&self, a: &Tensor, axis: Option<usize>) -> Result<Tensor> {
        arg_reduce_impl(a, axis, false, "argmin")
    }
}
