//! Core Tensor type

use super::{Layout, Storage};
use crate::dispatch_dtype;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::{Device, DeviceKind};

/// N-dimensional array
///
/// `Tensor` is the fundamental data structure in tensr. It consists of:
/// - **Storage**: Reference-counted host memory tagged with a dtype
/// - **Layout**: Shape, strides, and offset defining the view into storage
/// - **Device**: Execution-target tag (only CPU performs real work)
///
/// # Zero-Copy Views
///
/// `reshape`, `transpose`, `squeeze`, `expand_dims`, `slice` and `index`
/// return tensors that share the same underlying storage. The buffer is
/// released when the last tensor holding it is dropped, so views can never
/// dangle. Writes through `set`/`fill` are visible through every alias.
///
/// # Example
///
/// ```
/// use tensr::prelude::*;
///
/// let device = Device::cpu();
/// let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2], &device)?;
/// let b = a.transpose(None)?; // Zero-copy, shares storage with a
/// assert_eq!(b.get(&[0, 1])?, 3.0);
/// # Ok::<(), tensr::error::Error>(())
/// ```
#[derive(Clone)]
pub struct Tensor {
    storage: Storage,
    layout: Layout,
    device: Device,
}

impl Tensor {
    /// Create a tensor from storage and layout
    pub fn from_parts(storage: Storage, layout: Layout, device: Device) -> Self {
        debug_assert!(layout.required_len() <= storage.len().max(layout.offset()));
        Self {
            storage,
            layout,
            device,
        }
    }

    /// Create a tensor from a slice of data
    ///
    /// The dtype is inferred from `T`. Fails with `ShapeMismatch` if
    /// `data.len()` is not the product of `shape`.
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize], device: &Device) -> Result<Self> {
        Self::from_slice_as(data, shape, T::DTYPE, device)
    }

    /// Create a bool tensor
    pub fn from_bools(data: &[bool], shape: &[usize], device: &Device) -> Result<Self> {
        let bytes: Vec<u8> = data.iter().map(|&b| b as u8).collect();
        Self::from_slice_as(&bytes, shape, DType::Bool, device)
    }

    /// Create a 1-D tensor from a slice
    pub fn array_1d<T: Element>(data: &[T], device: &Device) -> Result<Self> {
        Self::from_slice(data, &[data.len()], device)
    }

    /// Create a `rows x cols` tensor from row-major data
    pub fn array_2d<T: Element>(
        data: &[T],
        rows: usize,
        cols: usize,
        device: &Device,
    ) -> Result<Self> {
        Self::from_slice(data, &[rows, cols], device)
    }

    pub(crate) fn from_slice_as<T: Element>(
        data: &[T],
        shape: &[usize],
        dtype: DType,
        device: &Device,
    ) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }
        let storage = Storage::from_slice(data, dtype)?;
        Ok(Self::from_parts(storage, Layout::contiguous(shape), *device))
    }

    /// Create a tensor with zero-filled contents
    ///
    /// This is the allocation primitive every factory builds on. Fails with
    /// `AllocationFailure` if the buffer cannot be obtained; nothing is
    /// retained in that case.
    pub fn empty(shape: &[usize], dtype: DType, device: &Device) -> Result<Self> {
        let numel = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or(Error::AllocationFailure { size: usize::MAX })?;
        let storage = Storage::new(numel, dtype)?;
        Ok(Self::from_parts(storage, Layout::contiguous(shape), *device))
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize], dtype: DType, device: &Device) -> Result<Self> {
        Self::empty(shape, dtype, device)
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: &[usize], dtype: DType, device: &Device) -> Result<Self> {
        Self::full(shape, 1.0, dtype, device)
    }

    /// Create a tensor filled with `value`, cast to `dtype` by truncation
    pub fn full(shape: &[usize], value: f64, dtype: DType, device: &Device) -> Result<Self> {
        let tensor = Self::empty(shape, dtype, device)?;
        tensor.fill(value)?;
        Ok(tensor)
    }

    /// Create a 0-dimensional tensor holding `value`
    pub fn scalar(value: f64, dtype: DType, device: &Device) -> Result<Self> {
        Self::full(&[], value, dtype, device)
    }

    // ===== Accessors =====

    /// Get the underlying storage
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the strides (in elements)
    #[inline]
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Number of dimensions
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Device tag
    #[inline]
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Check if the tensor is contiguous in memory
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Check if this is a 0-dimensional tensor
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.is_scalar()
    }

    /// True if both tensors view the same buffer
    #[inline]
    pub fn shares_storage(&self, other: &Tensor) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    pub(crate) fn check_axis(&self, axis: usize) -> Result<()> {
        if axis < self.ndim() {
            Ok(())
        } else {
            Err(Error::InvalidAxis {
                axis,
                ndim: self.ndim(),
            })
        }
    }

    fn with_layout(&self, layout: Layout) -> Self {
        Self {
            storage: self.storage.clone(),
            layout,
            device: self.device,
        }
    }

    // ===== View Operations (Zero-Copy) =====

    /// Permute dimensions (zero-copy)
    ///
    /// `axes` must be a permutation of `0..ndim`; `None` reverses the axes.
    /// The result is a strided view: the element at permuted coordinates is
    /// the element of `self` at the original coordinates.
    pub fn transpose(&self, axes: Option<&[usize]>) -> Result<Self> {
        match axes {
            Some(axes) => self.permute(axes),
            None => {
                let reversed: Vec<usize> = (0..self.ndim()).rev().collect();
                self.permute(&reversed)
            }
        }
    }

    /// Permute dimensions (zero-copy)
    ///
    /// # Example
    ///
    /// ```ignore
    /// let tensor = Tensor::from_slice(&data, &[2, 3, 4], &device)?;
    /// let permuted = tensor.permute(&[2, 0, 1])?; // Shape becomes [4, 2, 3]
    /// ```
    pub fn permute(&self, axes: &[usize]) -> Result<Self> {
        if axes.len() != self.ndim() {
            return Err(Error::shape_mismatch(self.shape(), axes));
        }
        let new_layout = self.layout.permute(axes).ok_or_else(|| Error::InvalidAxis {
            axis: axes
                .iter()
                .copied()
                .find(|&a| a >= self.ndim())
                .unwrap_or(axes[0]),
            ndim: self.ndim(),
        })?;
        Ok(self.with_layout(new_layout))
    }

    /// Reshape to a new shape
    ///
    /// Contiguous tensors yield a view sharing the buffer. Non-contiguous
    /// tensors are materialized first, so the result never aliases a strided
    /// buffer under a contiguous layout.
    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        let new_count: usize = shape.iter().product();
        if new_count != self.numel() {
            return Err(Error::shape_mismatch(shape, self.shape()));
        }
        match self.layout.reshape(shape) {
            Some(layout) => Ok(self.with_layout(layout)),
            None => self.contiguous()?.reshape(shape),
        }
    }

    /// Flatten to 1-D
    pub fn flatten(&self) -> Result<Self> {
        self.reshape(&[self.numel()])
    }

    /// Remove size-1 dimensions
    ///
    /// `None` removes all of them. `Some(axis)` removes only `axis`, which
    /// must exist and have size 1.
    pub fn squeeze(&self, axis: Option<usize>) -> Result<Self> {
        if let Some(axis) = axis {
            self.check_axis(axis)?;
            if self.shape()[axis] != 1 {
                return Err(Error::invalid_argument(
                    "axis",
                    format!("cannot squeeze axis {} of size {}", axis, self.shape()[axis]),
                ));
            }
        }
        let layout = self
            .layout
            .squeeze(axis)
            .ok_or_else(|| layout_error("squeeze"))?;
        Ok(self.with_layout(layout))
    }

    /// Insert a size-1 dimension at `axis` (`0..=ndim`)
    pub fn expand_dims(&self, axis: usize) -> Result<Self> {
        let layout = self.layout.unsqueeze(axis).ok_or(Error::InvalidAxis {
            axis,
            ndim: self.ndim() + 1,
        })?;
        Ok(self.with_layout(layout))
    }

    /// Take `start..stop` with `step` along `axis` (zero-copy)
    ///
    /// `stop` is clamped to the axis length.
    pub fn slice(&self, axis: usize, start: usize, stop: usize, step: usize) -> Result<Self> {
        self.check_axis(axis)?;
        if step == 0 {
            return Err(Error::invalid_argument("step", "slice step must be positive"));
        }
        let size = self.shape()[axis];
        if start > size {
            return Err(Error::IndexOutOfBounds { index: start, size });
        }
        let layout = self
            .layout
            .slice(axis, start, stop, step)
            .ok_or_else(|| layout_error("slice"))?;
        Ok(self.with_layout(layout))
    }

    /// Select index `i` along the leading axis, dropping it (zero-copy)
    pub fn index(&self, i: usize) -> Result<Self> {
        self.check_axis(0)?;
        let size = self.shape()[0];
        let layout = self
            .layout
            .select(0, i)
            .ok_or(Error::IndexOutOfBounds { index: i, size })?;
        Ok(self.with_layout(layout))
    }

    /// Return a tensor with a new device tag sharing this buffer
    ///
    /// No data moves: only the CPU performs real work.
    pub fn to_device(&self, kind: DeviceKind, id: usize) -> Self {
        Self {
            storage: self.storage.clone(),
            layout: self.layout.clone(),
            device: Device::new(kind, id),
        }
    }

    // ===== Copies =====

    /// Materialize into a contiguous buffer if needed
    ///
    /// Returns a clone sharing storage when already contiguous.
    pub fn contiguous(&self) -> Result<Self> {
        if self.is_contiguous() {
            return Ok(self.clone());
        }
        self.copy()
    }

    /// Deep copy: a fresh contiguous buffer with an independent lifetime
    pub fn copy(&self) -> Result<Self> {
        let out = Self::empty(self.shape(), self.dtype(), &self.device)?;
        let dtype = self.dtype();
        dispatch_dtype!(dtype, T => {
            self.with_values::<T, _>(|src| out.write_values::<T, _>(|dst| dst.copy_from_slice(src)));
        }, "copy");
        Ok(out)
    }

    // ===== Data Access =====

    /// Run `f` over the logical elements in row-major order
    ///
    /// Contiguous tensors are borrowed in place; strided views are gathered.
    pub(crate) fn with_values<T: Element, R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let data = self.storage.read::<T>();
        if self.is_contiguous() {
            let start = self.layout.offset();
            f(&data[start..start + self.numel()])
        } else {
            let gathered: Vec<T> = self.layout.positions().map(|p| data[p]).collect();
            drop(data);
            f(&gathered)
        }
    }

    /// Run `f` over the mutable elements of a freshly allocated tensor
    pub(crate) fn write_values<T: Element, R>(&self, f: impl FnOnce(&mut [T]) -> R) -> R {
        debug_assert!(self.is_contiguous());
        let start = self.layout.offset();
        let numel = self.numel();
        let mut data = self.storage.write::<T>();
        f(&mut data[start..start + numel])
    }

    fn check_element<T: Element>(&self) -> Result<()> {
        let dtype = self.dtype();
        if T::DTYPE == dtype || (dtype == DType::Bool && T::DTYPE == DType::U8) {
            Ok(())
        } else {
            Err(Error::DTypeMismatch {
                lhs: dtype,
                rhs: T::DTYPE,
            })
        }
    }

    /// Copy the logical elements to a Vec in row-major order
    ///
    /// `T` must match the dtype (`u8` for bool tensors).
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        self.check_element::<T>()?;
        Ok(self.with_values::<T, _>(|v| v.to_vec()))
    }

    /// Copy the logical elements to a Vec<f64>, whatever the dtype
    pub fn to_f64_vec(&self) -> Vec<f64> {
        let dtype = self.dtype();
        dispatch_dtype!(dtype, T => {
            self.with_values::<T, _>(|v| v.iter().map(|x| x.to_f64()).collect::<Vec<f64>>())
        }, "to_f64_vec")
    }

    /// Extract the value of a single-element tensor
    pub fn item<T: Element>(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(Error::ShapeMismatch {
                expected: vec![1],
                got: self.shape().to_vec(),
            });
        }
        self.check_element::<T>()?;
        let data = self.storage.read::<T>();
        Ok(data[self.layout.offset()])
    }

    /// Read one element as f64
    pub fn get(&self, indices: &[usize]) -> Result<f64> {
        let pos = self.position(indices)?;
        let dtype = self.dtype();
        dispatch_dtype!(dtype, T => {
            Ok(self.storage.read::<T>()[pos].to_f64())
        }, "get")
    }

    /// Write one element, casting `value` to the dtype by truncation
    ///
    /// Visible through every view sharing this buffer.
    pub fn set(&self, indices: &[usize], value: f64) -> Result<()> {
        let pos = self.position(indices)?;
        let dtype = self.dtype();
        dispatch_dtype!(dtype, T => {
            self.storage.write::<T>()[pos] = cast_value::<T>(value, dtype);
        }, "set");
        Ok(())
    }

    /// Overwrite every element of this view with `value`
    pub fn fill(&self, value: f64) -> Result<()> {
        let dtype = self.dtype();
        dispatch_dtype!(dtype, T => {
            let v = cast_value::<T>(value, dtype);
            let mut data = self.storage.write::<T>();
            if self.is_contiguous() {
                let start = self.layout.offset();
                data[start..start + self.numel()].fill(v);
            } else {
                for p in self.layout.positions() {
                    data[p] = v;
                }
            }
        }, "fill");
        Ok(())
    }

    fn position(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != self.ndim() {
            return Err(Error::shape_mismatch(self.shape(), indices));
        }
        for (&index, &size) in indices.iter().zip(self.shape()) {
            if index >= size {
                return Err(Error::IndexOutOfBounds { index, size });
            }
        }
        self.layout
            .index(indices)
            .ok_or_else(|| layout_error("index"))
    }
}

/// Truncating cast of an f64 into `T`; bool tensors store `value != 0`
pub(crate) fn cast_value<T: Element>(value: f64, dtype: DType) -> T {
    if dtype == DType::Bool {
        T::from_f64(if value != 0.0 { 1.0 } else { 0.0 })
    } else {
        T::from_f64(value)
    }
}

fn layout_error(op: &'static str) -> Error {
    Error::invalid_argument("layout", format!("inconsistent layout in '{}'", op))
}

impl std::fmt::Debug for Tensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("device", &self.device)
            .field("layout", &self.layout)
            .finish()
    }
}
