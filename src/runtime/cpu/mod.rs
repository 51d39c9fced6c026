//! CPU runtime
//!
//! All computation is synchronous and single-threaded.

mod client;
pub(crate) mod helpers;
pub(crate) mod kernels;
pub(crate) mod linalg;

pub use client::{ClientConfig, CpuClient};
