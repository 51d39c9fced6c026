//! Shape operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Joining tensors.
///
/// All inputs must share a dtype. The result is a fresh contiguous tensor on
/// the device of the first input. An empty input list is `InvalidArgument`.
pub trait ShapeOps {
    /// Join along an existing axis; other dimensions must match
    fn concat(&self, tensors: &[&Tensor], axis: usize) -> Result<Tensor>;

    /// Join along a new axis inserted at `axis`; shapes must be identical
    fn stack(&self, tensors: &[&Tensor], axis: usize) -> Result<Tensor>;

    /// Stack vertically: 1-D inputs become rows, then join along axis 0
    fn vstack(&self, tensors: &[&Tensor]) -> Result<Tensor>;

    /// Stack horizontally: 1-D inputs join along axis 0, others along axis 1
    fn hstack(&self, tensors: &[&Tensor]) -> Result<Tensor>;
}
