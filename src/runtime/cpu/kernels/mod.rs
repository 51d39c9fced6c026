//! CPU kernels
//!
//! Kernels operate on plain slices of concrete element types. Callers (the
//! helpers) are responsible for validation, dtype dispatch and for handing
//! in logically ordered, contiguous data.

mod binary;
mod compare;
mod fft;
mod fill;
mod logical;
mod matmul;
mod reduce;
mod unary;

pub use binary::*;
pub use compare::*;
pub use fft::*;
pub use fill::*;
pub use logical::*;
pub use matmul::*;
pub use reduce::*;
pub use unary::*;
