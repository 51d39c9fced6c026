//! Operation traits for tensor operations.
//!
//! Implementations live in `ops/cpu/` and are provided by
//! [`CpuClient`](crate::runtime::cpu::CpuClient).

mod binary;
mod compare;
mod fft;
mod indexing;
mod linalg;
mod logical;
mod reduce;
mod shape;
mod unary;
mod utility;

pub use binary::BinaryOps;
pub use compare::CompareOps;
pub use fft::FftOps;
pub use indexing::IndexingOps;
pub use linalg::{EigenDecomposition, LinalgOps, SvdDecomposition};
pub use logical::LogicalOps;
pub use reduce::ReduceOps;
pub use shape::ShapeOps;
pub use unary::UnaryOps;
pub use utility::UtilityOps;
