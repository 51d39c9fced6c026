//! Unary operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Element-wise unary operations.
///
/// The math functions are defined for float32 and float64 only. `abs` and
/// `neg` also accept signed integers (wrapping), and `abs` accepts uint8.
/// Out-of-domain inputs produce NaN, following IEEE-754.
pub trait UnaryOps {
    /// Square root
    fn sqrt(&self, a: &Tensor) -> Result<Tensor>;

    /// Natural exponential
    fn exp(&self, a: &Tensor) -> Result<Tensor>;

    /// Natural logarithm
    fn log(&self, a: &Tensor) -> Result<Tensor>;

    /// Sine (radians)
    fn sin(&self, a: &Tensor) -> Result<Tensor>;

    /// Cosine (radians)
    fn cos(&self, a: &Tensor) -> Result<Tensor>;

    /// Tangent (radians)
    fn tan(&self, a: &Tensor) -> Result<Tensor>;

    /// Inverse sine
    fn arcsin(&self, a: &Tensor) -> Result<Tensor>;

    /// Inverse cosine
    fn arccos(&self, a: &Tensor) -> Result<Tensor>;

    /// Inverse tangent
    fn arctan(&self, a: &Tensor) -> Result<Tensor>;

    /// Absolute value
    fn abs(&self, a: &Tensor) -> Result<Tensor>;

    /// Negation
    fn neg(&self, a: &Tensor) -> Result<Tensor>;

    /// Raise every element to a scalar power
    fn pow(&self, a: &Tensor, exponent: f64) -> Result<Tensor>;
}
