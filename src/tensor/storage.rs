//! Storage: host memory management with Arc-based sharing

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use parking_lot::{
    MappedRwLockReadGuard, MappedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard,
};
use std::sync::Arc;

/// Storage for tensor data
///
/// Storage wraps a host buffer with reference counting, enabling zero-copy
/// views (reshape, transpose, slice, ...) that share the underlying buffer.
/// Memory is released when the last holder is dropped, so a view can never
/// outlive the data it points into.
///
/// The buffer is kept as 8-byte words so that any element type can be
/// reinterpreted in place with `bytemuck` without alignment concerns.
#[derive(Clone)]
pub struct Storage {
    inner: Arc<StorageInner>,
}

struct StorageInner {
    /// Backing words; `len * dtype.size_in_bytes()` leading bytes are live
    words: RwLock<Vec<u64>>,
    /// Number of elements (not bytes)
    len: usize,
    /// Element type
    dtype: DType,
}

impl Storage {
    /// Allocate zero-filled storage for `len` elements of `dtype`
    ///
    /// Fails with `AllocationFailure` if the byte size overflows or the
    /// allocator refuses the request.
    pub fn new(len: usize, dtype: DType) -> Result<Self> {
        let size_bytes = len
            .checked_mul(dtype.size_in_bytes())
            .ok_or(Error::AllocationFailure { size: usize::MAX })?;
        let words = alloc_words(size_bytes)?;

        Ok(Self {
            inner: Arc::new(StorageInner {
                words: RwLock::new(words),
                len,
                dtype,
            }),
        })
    }

    /// Create storage holding a copy of `data`, tagged with `dtype`
    ///
    /// `dtype` must have the width of `T` (Bool is stored as `u8`).
    pub fn from_slice<T: Element>(data: &[T], dtype: DType) -> Result<Self> {
        debug_assert_eq!(std::mem::size_of::<T>(), dtype.size_in_bytes());
        Self::from_bytes(bytemuck::cast_slice(data), dtype)
    }

    /// Create storage from raw native-endian bytes with explicit dtype
    pub fn from_bytes(data: &[u8], dtype: DType) -> Result<Self> {
        let width = dtype.size_in_bytes();
        if data.len() % width != 0 {
            return Err(Error::invalid_argument(
                "data",
                format!("{} bytes is not a whole number of {} elements", data.len(), dtype),
            ));
        }
        let storage = Self::new(data.len() / width, dtype)?;
        storage.write_bytes().copy_from_slice(data);
        Ok(storage)
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len
    }

    /// Check if storage is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len == 0
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.inner.dtype
    }

    /// Get the size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.inner.len * self.inner.dtype.size_in_bytes()
    }

    /// Number of tensors (and views) currently sharing this buffer
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// True if both handles refer to the same buffer
    #[inline]
    pub fn ptr_eq(&self, other: &Storage) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Borrow the elements as `&[T]`
    pub fn read<T: Element>(&self) -> MappedRwLockReadGuard<'_, [T]> {
        debug_assert_eq!(std::mem::size_of::<T>(), self.inner.dtype.size_in_bytes());
        let len = self.inner.len;
        RwLockReadGuard::map(self.inner.words.read_recursive(), move |w| {
            &bytemuck::cast_slice::<u64, T>(w)[..len]
        })
    }

    /// Borrow the elements as `&mut [T]`
    pub fn write<T: Element>(&self) -> MappedRwLockWriteGuard<'_, [T]> {
        debug_assert_eq!(std::mem::size_of::<T>(), self.inner.dtype.size_in_bytes());
        let len = self.inner.len;
        RwLockWriteGuard::map(self.inner.words.write(), move |w| {
            &mut bytemuck::cast_slice_mut::<u64, T>(w)[..len]
        })
    }

    /// Borrow the live bytes
    pub fn read_bytes(&self) -> MappedRwLockReadGuard<'_, [u8]> {
        let size = self.size_in_bytes();
        RwLockReadGuard::map(self.inner.words.read_recursive(), move |w| {
            &bytemuck::cast_slice::<u64, u8>(w)[..size]
        })
    }

    /// Mutably borrow the live bytes
    pub fn write_bytes(&self) -> MappedRwLockWriteGuard<'_, [u8]> {
        let size = self.size_in_bytes();
        RwLockWriteGuard::map(self.inner.words.write(), move |w| {
            &mut bytemuck::cast_slice_mut::<u64, u8>(w)[..size]
        })
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.inner.len)
            .field("dtype", &self.inner.dtype)
            .field("refs", &self.ref_count())
            .finish()
    }
}

fn alloc_words(size_bytes: usize) -> Result<Vec<u64>> {
    let n_words = size_bytes.div_ceil(8);
    let mut words = Vec::new();
    words
        .try_reserve_exact(n_words)
        .map_err(|_| Error::AllocationFailure { size: size_bytes })?;
    words.resize(n_words, 0);
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_storage_is_zeroed() {
        let storage = Storage::new(5, DType::I32).unwrap();
        assert_eq!(storage.len(), 5);
        assert_eq!(storage.size_in_bytes(), 20);
        assert!(storage.read::<i32>().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_from_slice_and_write() {
        let storage = Storage::from_slice(&[1.0f32, 2.0, 3.0], DType::F32).unwrap();
        storage.write::<f32>()[1] = 7.0;
        assert_eq!(&*storage.read::<f32>(), &[1.0, 7.0, 3.0]);
    }

    #[test]
    fn test_odd_byte_lengths() {
        let storage = Storage::from_slice(&[1u8, 2, 3], DType::U8).unwrap();
        assert_eq!(&*storage.read_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_shared_handles() {
        let a = Storage::new(4, DType::F64).unwrap();
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.ref_count(), 2);
        drop(b);
        assert_eq!(a.ref_count(), 1);
    }

    #[test]
    fn test_overflowing_allocation_fails() {
        let err = Storage::new(usize::MAX, DType::F64).unwrap_err();
        assert!(matches!(err, Error::AllocationFailure { .. }));
    }
}
