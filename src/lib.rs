//! # tensr
//!
//! **Dense strided tensors for Rust.**
//!
//! tensr provides n-dimensional arrays over reference-counted host buffers,
//! with elementwise math, reductions, linear algebra, FFT, random generation
//! and a binary file codec.
//!
//! ## Features
//!
//! - **Tensors**: shape/stride views with zero-copy reshape, transpose,
//!   squeeze, slice and index
//! - **Dtypes**: float32, float64, int32, int64, uint8, bool
//! - **Element-wise ops**: arithmetic, math and trig, comparison, logical
//! - **Reductions**: sum, mean, max, min over any axes, argmax, argmin
//! - **Linear algebra**: dot, matmul, inv, det, solve, lstsq, SVD,
//!   eigendecomposition
//! - **FFT**: 1-D and 2-D forward and inverse transforms
//! - **Random**: explicit seeded generators for uniform, normal and integer
//!   samples
//! - **Codec**: save/load of a fixed native-endian binary layout
//!
//! ## Quick Start
//!
//! ```
//! use tensr::prelude::*;
//!
//! let device = Device::cpu();
//! let client = CpuClient::new(device);
//!
//! let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2], &device)?;
//! let b = Tensor::from_slice(&[5.0f32, 6.0, 7.0, 8.0], &[2, 2], &device)?;
//!
//! let c = client.add(&a, &b)?;
//! let d = client.matmul(&a, &b)?;
//! assert_eq!(c.to_vec::<f32>()?, vec![6.0, 8.0, 10.0, 12.0]);
//! assert_eq!(d.to_vec::<f32>()?, vec![19.0, 22.0, 43.0, 50.0]);
//! # Ok::<(), tensr::error::Error>(())
//! ```
//!
//! ## Devices
//!
//! Only the CPU performs work. CUDA, XPU, NPU and TPU exist as device tags so
//! that tensors can carry them, but nothing is dispatched to them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod dtype;
pub mod error;
pub mod io;
pub mod ops;
pub mod random;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::DType;
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        BinaryOps, CompareOps, EigenDecomposition, FftOps, IndexingOps, LinalgOps, LogicalOps,
        ReduceOps, ShapeOps, SvdDecomposition, UnaryOps, UtilityOps,
    };
    pub use crate::random::Generator;
    pub use crate::runtime::cpu::{ClientConfig, CpuClient};
    pub use crate::runtime::{device_count, Device, DeviceKind, RuntimeClient};
    pub use crate::tensor::{Layout, PrintOptions, Tensor};
}
