//! Reduction operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Reductions over any subset of axes.
///
/// `axes` may list dimensions in any order; duplicates are ignored and an
/// empty slice reduces over every dimension to a 0-dimensional result. With
/// `keepdims` the reduced dimensions stay in the shape with size 1.
///
/// # Example
///
/// ```
/// use tensr::prelude::*;
///
/// let device = Device::cpu();
/// let client = CpuClient::new(device);
/// let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3], &device)?;
///
/// let rows = client.sum(&a, &[1], false)?;
/// assert_eq!(rows.to_vec::<f64>()?, vec![6.0, 15.0]);
///
/// let total = client.sum(&a, &[], false)?;
/// assert_eq!(total.item::<f64>()?, 21.0);
/// # Ok::<(), tensr::error::Error>(())
/// ```
pub trait ReduceOps {
    /// Sum of elements. The sum of zero elements is 0.
    fn sum(&self, a: &Tensor, axes: &[usize], keepdims: bool) -> Result<Tensor>;

    /// Arithmetic mean
    ///
    /// Integer inputs accumulate in f64 and truncate back to their dtype.
    /// The mean of zero float elements is NaN.
    fn mean(&self, a: &Tensor, axes: &[usize], keepdims: bool) -> Result<Tensor>;

    /// Maximum. NaN propagates; an empty selection is `InvalidArgument`.
    fn max(&self, a: &Tensor, axes: &[usize], keepdims: bool) -> Result<Tensor>;

    /// Minimum. NaN propagates; an empty selection is `InvalidArgument`.
    fn min(&self, a: &Tensor, axes: &[usize], keepdims: bool) -> Result<Tensor>;
}
