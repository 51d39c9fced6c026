//! CPU implementation of utility operations.

use crate::dtype::DType;
use crate::error::Result;
use crate::ops::UtilityOps;
use crate::runtime::cpu::{
    helpers::{arange_impl, eye_impl, linspace_impl},
    CpuClient,
};
use crate::tensor::Tensor;

impl UtilityOps for CpuClient {
    fn arange(&self, start: f64, stop: f64, step: f64, dtype: DType) -> Result<Tensor> {
        arange_impl(start, stop, step, dtype, &self.device)
    }

    fn linspace(&self, start: f64, stop: f64, num: usize, dtype: DType) -> Result<Tensor> {
        linspace_impl(start, stop, num, dtype, &self.device)
    }

    fn eye(&self, n: usize, dtype: DType) -> Result<Tensor> {
        eye_impl(n, None, dtype, &self.device)
    }
}
