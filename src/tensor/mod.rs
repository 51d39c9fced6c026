//! Tensor types and operations
//!
//! This module provides the core `Tensor` type, which represents an n-dimensional
//! array over a reference-counted host buffer, together with its layout and
//! storage building blocks.

mod core;
mod display;
mod layout;
mod storage;

pub(crate) use core::cast_value;
pub use core::Tensor;
pub use display::{PrintOptions, TensorDisplay};
pub use layout::{Layout, Positions, Shape, Strides};
pub use storage::Storage;
