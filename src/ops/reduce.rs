//! Reduction operations helpers
//!
//! This module contains helper types and functions for reduction operations.
//! The actual operations are defined in the `ReduceOps` trait.

use crate::error::{Error, Result};

/// Reduction operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReduceOp {
    /// Sum of elements
    Sum,
    /// Mean of elements
    Mean,
    /// Maximum element
    Max,
    /// Minimum element
    Min,
}

impl ReduceOp {
    /// Operation name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Mean => "mean",
            Self::Max => "max",
            Self::Min => "min",
        }
    }
}

/// Compute output shape for reduction
///
/// # Arguments
/// * `input_shape` - Shape of input tensor
/// * `axes` - Axes to reduce over
/// * `keepdims` - If true, keep reduced axes as size 1
pub fn reduce_output_shape(input_shape: &[usize], axes: &[usize], keepdims: bool) -> Vec<usize> {
    if keepdims {
        input_shape
            .iter()
            .enumerate()
            .map(|(i, &s)| if axes.contains(&i) { 1 } else { s })
            .collect()
    } else {
        input_shape
            .iter()
            .enumerate()
            .filter(|(i, _)| !axes.contains(i))
            .map(|(_, &s)| s)
            .collect()
    }
}

/// Validate reduction axes, returning them sorted and deduplicated
///
/// An empty slice selects every axis.
pub fn normalize_axes(ndim: usize, axes: &[usize]) -> Result<Vec<usize>> {
    if axes.is_empty() {
        return Ok(all_axes(ndim));
    }
    let mut out = Vec::with_capacity(axes.len());
    for &axis in axes {
        if axis >= ndim {
            return Err(Error::InvalidAxis { axis, ndim });
        }
        if !out.contains(&axis) {
            out.push(axis);
        }
    }
    out.sort_unstable();
    Ok(out)
}

/// All axes for full reduction
pub fn all_axes(ndim: usize) -> Vec<usize> {
    (0..ndim).collect()
}
