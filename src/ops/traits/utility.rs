//! Utility operations trait.

use crate::dtype::DType;
use crate::error::Result;
use crate::tensor::Tensor;

/// Range and identity factories placed on the client's device
pub trait UtilityOps {
    /// Values `start + i * step` for `i in 0..ceil((stop - start) / step)`
    ///
    /// The result is empty when `step` points away from `stop`. A zero or
    /// non-finite step is `InvalidArgument`.
    fn arange(&self, start: f64, stop: f64, step: f64, dtype: DType) -> Result<Tensor>;

    /// `num` evenly spaced values from `start` to `stop` inclusive
    ///
    /// `num == 1` yields `[start]` and `num == 0` an empty tensor.
    fn linspace(&self, start: f64, stop: f64, num: usize, dtype: DType) -> Result<Tensor>;

    /// `n x n` identity matrix
    fn eye(&self, n: usize, dtype: DType) -> Result<Tensor>;
}
