//! Logical operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Logical operations on bool tensors
pub trait LogicalOps {
    /// Element-wise AND
    fn logical_and(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
    /// Element-wise OR
    fn logical_or(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
    /// Element-wise NOT
    fn logical_not(&self, a: &Tensor) -> Result<Tensor>;
}
