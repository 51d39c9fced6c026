//! Comparison operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Element-wise comparisons producing bool tensors.
///
/// Operands follow the binary-operation rules (equal element count, equal
/// dtype). Any dtype, bool included, may be compared.
pub trait CompareOps {
    /// a == b
    fn equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
    /// a != b
    fn not_equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
    /// a > b
    fn greater(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
    /// a < b
    fn less(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
    /// a >= b
    fn greater_equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
    /// a <= b
    fn less_equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
}
