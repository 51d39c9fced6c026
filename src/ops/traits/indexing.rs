//! Index-producing operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Positions of extreme values.
///
/// Results are int64. With `axis = None` the tensor is searched flattened in
/// row-major order and the result is 0-dimensional; otherwise `axis` is
/// removed from the shape. Ties resolve to the first occurrence.
pub trait IndexingOps {
    /// Index of the maximum value
    fn argmax(&self, a: &Tensor, axis: Option<usize>) -> Result<Tensor>;

    /// Index of the minimum value
    fn argmin(&self, a: &Tensor, axis: Option<usize>) -> Result<Tensor>;
}
