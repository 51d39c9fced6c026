//! Helper functions for CPU tensor operations
//!
//! Each helper validates its inputs, allocates the output tensor and runs the
//! matching kernel under dtype dispatch. The trait implementations in
//! `crate::ops` are thin wrappers over these.

mod binary;
mod compare;
mod fft;
mod reduce;
mod shape;
mod unary;
mod utility;

pub use binary::*;
pub use compare::*;
pub use fft::*;
pub use reduce::*;
pub use shape::*;
pub use unary::*;
pub use utility::*;
