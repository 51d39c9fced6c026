//! Runtime: device tags and the CPU execution client
//!
//! # Architecture
//!
//! ```text
//! runtime
//! ├── Device / DeviceKind (execution-target tags)
//! └── cpu
//!     ├── CpuClient (dispatches operations, owns configuration)
//!     ├── helpers (validation + dtype dispatch per operation family)
//!     ├── kernels (generic slice kernels)
//!     └── linalg (decompositions and solvers)
//! ```

mod device;

pub mod cpu;

pub use device::{device_count, Device, DeviceKind};

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// Operation dispatcher bound to a device
pub trait RuntimeClient: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &Device;

    /// Block until all outstanding work on the device has completed
    fn synchronize(&self);
}

/// Validate that two tensors share a dtype, returning it
pub(crate) fn validate_binary_dtypes(a: &Tensor, b: &Tensor) -> Result<DType> {
    if a.dtype() != b.dtype() {
        return Err(Error::DTypeMismatch {
            lhs: a.dtype(),
            rhs: b.dtype(),
        });
    }
    Ok(a.dtype())
}

/// Validate that two tensors hold the same number of elements
pub(crate) fn validate_same_size(a: &Tensor, b: &Tensor) -> Result<()> {
    if a.numel() != b.numel() {
        return Err(Error::shape_mismatch(a.shape(), b.shape()));
    }
    Ok(())
}
