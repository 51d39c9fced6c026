//! Binary operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Element-wise binary operations on tensors.
///
/// Operands must hold the same number of elements and share a dtype; there
/// is no broadcasting and no implicit promotion. The result takes the shape,
/// dtype and device of `a`. Integer arithmetic wraps on overflow and bool
/// operands are rejected with `UnsupportedOperation`.
///
/// # Example
///
/// ```
/// use tensr::prelude::*;
///
/// let device = Device::cpu();
/// let client = CpuClient::new(device);
///
/// let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2], &device)?;
/// let b = Tensor::from_slice(&[5.0f32, 6.0, 7.0, 8.0], &[2, 2], &device)?;
///
/// let c = client.add(&a, &b)?; // [6.0, 8.0, 10.0, 12.0]
/// assert_eq!(c.to_vec::<f32>()?, vec![6.0, 8.0, 10.0, 12.0]);
/// # Ok::<(), tensr::error::Error>(())
/// ```
pub trait BinaryOps {
    /// Element-wise addition: a + b
    fn add(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;

    /// Element-wise subtraction: a - b
    fn sub(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;

    /// Element-wise multiplication: a * b
    fn mul(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;

    /// Element-wise division: a / b
    ///
    /// Float division follows IEEE-754 (`x / 0` is ±inf or NaN). Integer
    /// division truncates toward zero; a zero divisor is `InvalidArgument`.
    fn div(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
}
