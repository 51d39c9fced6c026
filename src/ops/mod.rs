//! Tensor operations
//!
//! This module defines operation traits and the helper types used to
//! dispatch them.
//!
//! # Design
//!
//! Operations are defined as traits implemented by [`CpuClient`](crate::runtime::cpu::CpuClient).
//! Each implementation validates shapes and dtypes, allocates a fresh output
//! tensor and runs a generic kernel selected through `dispatch_dtype!`.
//!
//! ```text
//! CpuClient
//!   ├── BinaryOps    add, sub, mul, div
//!   ├── UnaryOps     sqrt, exp, log, abs, sin, cos, tan, arcsin, arccos, arctan, neg, pow
//!   ├── CompareOps   equal, not_equal, greater, less, greater_equal, less_equal
//!   ├── LogicalOps   logical_and, logical_or, logical_not
//!   ├── ReduceOps    sum, mean, max, min
//!   ├── IndexingOps  argmax, argmin
//!   ├── LinalgOps    dot, matmul, inv, det, solve, lstsq, svd, eig
//!   ├── ShapeOps     concat, stack, vstack, hstack
//!   ├── UtilityOps   arange, linspace, eye
//!   └── FftOps       fft, ifft, fft2, ifft2
//! ```
//!
//! # Operation Categories
//!
//! ## Element-wise Operations
//! Binary operations require equal element counts and equal dtypes. There is
//! no broadcasting and no implicit promotion; the result takes the shape,
//! dtype and device of the first operand.
//!
//! ## Reductions
//! Sum, mean, max, min over any subset of axes with optional keepdims.

mod arithmetic;
mod cpu;
pub(crate) mod dispatch;
mod reduce;
pub mod traits;

pub use arithmetic::*;
pub use reduce::*;
pub use traits::*;
