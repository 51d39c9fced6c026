//! Layout: shape, strides, and offset for tensor memory layout

use smallvec::SmallVec;
use std::fmt;

/// Stack allocation threshold for dimensions
/// Most tensors have 4 or fewer dimensions, so we stack-allocate up to 4
const STACK_DIMS: usize = 4;

/// Shape type: dimensions of a tensor
pub type Shape = SmallVec<[usize; STACK_DIMS]>;

/// Strides type: element offsets between consecutive elements along each dimension
/// NOTE: Strides are in ELEMENTS, not bytes
pub type Strides = SmallVec<[isize; STACK_DIMS]>;

/// Layout describes the memory layout of a tensor
///
/// A tensor's elements live in a shared buffer, but not necessarily in
/// row-major order. The layout specifies how to compute the buffer position
/// of any element given its indices.
///
/// Address of element at indices [i0, i1, ..., in]:
///   offset + i0 * strides[0] + i1 * strides[1] + ... + in * strides[n]
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Shape,
    strides: Strides,
    offset: usize,
}

impl Layout {
    /// Create a new contiguous (row-major/C-order) layout from a shape
    ///
    /// # Example
    /// ```
    /// use tensr::tensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3, 4]);
    /// assert_eq!(layout.shape(), &[2, 3, 4]);
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        let shape: Shape = shape.iter().copied().collect();
        let strides = Self::compute_contiguous_strides(&shape);
        Self {
            shape,
            strides,
            offset: 0,
        }
    }

    /// Create a layout with explicit shape, strides, and offset
    pub fn new(shape: Shape, strides: Strides, offset: usize) -> Self {
        debug_assert_eq!(shape.len(), strides.len());
        Self {
            shape,
            strides,
            offset,
        }
    }

    /// Create a scalar (0-dimensional) layout
    pub fn scalar() -> Self {
        Self {
            shape: SmallVec::new(),
            strides: SmallVec::new(),
            offset: 0,
        }
    }

    /// Compute contiguous strides for a given shape (row-major order)
    fn compute_contiguous_strides(shape: &[usize]) -> Strides {
        let mut strides: Strides = SmallVec::from_elem(0, shape.len());
        let mut stride = 1isize;
        for (slot, &dim) in strides.iter_mut().zip(shape.iter()).rev() {
            *slot = stride;
            stride *= dim.max(1) as isize;
        }
        strides
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Get the offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// Check if the tensor is a scalar (0 dimensions)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Check if the elements occupy `offset..offset + elem_count` in row-major order
    ///
    /// Size-1 dimensions are ignored since their stride is never used.
    pub fn is_contiguous(&self) -> bool {
        if self.elem_count() == 0 {
            return true;
        }
        let mut expected = 1isize;
        for (&dim, &stride) in self.shape.iter().zip(self.strides.iter()).rev() {
            if dim == 1 {
                continue;
            }
            if stride != expected {
                return false;
            }
            expected *= dim as isize;
        }
        true
    }

    /// Compute the buffer position for given indices
    pub fn index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.ndim() {
            return None;
        }

        let mut linear = self.offset as isize;
        for ((&idx, &dim), &stride) in indices.iter().zip(self.shape.iter()).zip(self.strides.iter())
        {
            if idx >= dim {
                return None;
            }
            linear += idx as isize * stride;
        }

        Some(linear as usize)
    }

    /// Create a layout with dimensions reordered by `axes`
    ///
    /// Returns None unless `axes` is a permutation of `0..ndim`.
    pub fn permute(&self, axes: &[usize]) -> Option<Self> {
        if axes.len() != self.ndim() {
            return None;
        }
        let mut seen: SmallVec<[bool; STACK_DIMS]> = SmallVec::from_elem(false, axes.len());
        for &a in axes {
            if a >= axes.len() || seen[a] {
                return None;
            }
            seen[a] = true;
        }

        Some(Self {
            shape: axes.iter().map(|&a| self.shape[a]).collect(),
            strides: axes.iter().map(|&a| self.strides[a]).collect(),
            offset: self.offset,
        })
    }

    /// Create a reshaped layout (if contiguous)
    ///
    /// Returns None if the layout is not contiguous or element counts differ
    pub fn reshape(&self, new_shape: &[usize]) -> Option<Self> {
        if !self.is_contiguous() {
            return None;
        }

        let new_count: usize = new_shape.iter().product();
        if new_count != self.elem_count() {
            return None;
        }

        let mut layout = Self::contiguous(new_shape);
        layout.offset = self.offset;
        Some(layout)
    }

    /// Create a squeezed layout
    ///
    /// `None` removes every size-1 dimension; `Some(d)` removes `d`, which must
    /// be in range and of size 1.
    pub fn squeeze(&self, dim: Option<usize>) -> Option<Self> {
        match dim {
            Some(d) => {
                if d >= self.ndim() || self.shape[d] != 1 {
                    return None;
                }
                let mut new_shape = self.shape.clone();
                let mut new_strides = self.strides.clone();
                new_shape.remove(d);
                new_strides.remove(d);
                Some(Self::new(new_shape, new_strides, self.offset))
            }
            None => {
                let mut new_shape = Shape::new();
                let mut new_strides = Strides::new();
                for (&s, &st) in self.shape.iter().zip(self.strides.iter()) {
                    if s != 1 {
                        new_shape.push(s);
                        new_strides.push(st);
                    }
                }
                Some(Self::new(new_shape, new_strides, self.offset))
            }
        }
    }

    /// Create an unsqueezed layout (insert a dimension of size 1 at `dim`)
    pub fn unsqueeze(&self, dim: usize) -> Option<Self> {
        let ndim = self.ndim();
        if dim > ndim {
            return None;
        }

        let new_stride = if dim < ndim {
            self.strides[dim] * self.shape[dim] as isize
        } else {
            1
        };

        let mut new_shape = self.shape.clone();
        let mut new_strides = self.strides.clone();
        new_shape.insert(dim, 1);
        new_strides.insert(dim, new_stride);

        Some(Self::new(new_shape, new_strides, self.offset))
    }

    /// Restrict `dim` to `start..stop` taking every `step`-th element
    ///
    /// `stop` is clamped to the dimension size. Returns None if `dim` is out
    /// of range, `step` is zero or `start` lies beyond the dimension.
    pub fn slice(&self, dim: usize, start: usize, stop: usize, step: usize) -> Option<Self> {
        if dim >= self.ndim() || step == 0 {
            return None;
        }
        let size = self.shape[dim];
        let stop = stop.min(size);
        if start > size {
            return None;
        }
        let len = if stop > start {
            (stop - start).div_ceil(step)
        } else {
            0
        };

        let mut new_shape = self.shape.clone();
        let mut new_strides = self.strides.clone();
        let offset = if len > 0 {
            (self.offset as isize + start as isize * self.strides[dim]) as usize
        } else {
            self.offset
        };
        new_shape[dim] = len;
        new_strides[dim] *= step as isize;

        Some(Self::new(new_shape, new_strides, offset))
    }

    /// Fix `dim` at `index`, dropping that dimension
    pub fn select(&self, dim: usize, index: usize) -> Option<Self> {
        if dim >= self.ndim() || index >= self.shape[dim] {
            return None;
        }
        let offset = (self.offset as isize + index as isize * self.strides[dim]) as usize;
        let mut new_shape = self.shape.clone();
        let mut new_strides = self.strides.clone();
        new_shape.remove(dim);
        new_strides.remove(dim);
        Some(Self::new(new_shape, new_strides, offset))
    }

    /// Iterate buffer positions in logical row-major order
    pub fn positions(&self) -> Positions<'_> {
        let total = self.elem_count();
        Positions {
            layout: self,
            counter: SmallVec::from_elem(0, self.ndim()),
            current: self.offset as isize,
            remaining: total,
        }
    }

    /// One past the highest buffer position this layout can touch
    pub fn required_len(&self) -> usize {
        if self.elem_count() == 0 {
            return self.offset;
        }
        let mut max = self.offset as isize;
        for (&dim, &stride) in self.shape.iter().zip(self.strides.iter()) {
            if stride > 0 {
                max += (dim as isize - 1) * stride;
            }
        }
        max as usize + 1
    }
}

/// Iterator over buffer positions of a strided layout
pub struct Positions<'a> {
    layout: &'a Layout,
    counter: SmallVec<[usize; STACK_DIMS]>,
    current: isize,
    remaining: usize,
}

impl Iterator for Positions<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let pos = self.current as usize;
        self.remaining -= 1;

        // Odometer increment from the last dimension
        for d in (0..self.counter.len()).rev() {
            self.counter[d] += 1;
            self.current += self.layout.strides[d];
            if self.counter[d] < self.layout.shape[d] {
                break;
            }
            self.current -= self.layout.strides[d] * self.layout.shape[d] as isize;
            self.counter[d] = 0;
        }

        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Positions<'_> {}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, strides: {:?}, offset: {} }}",
            self.shape.as_slice(),
            self.strides.as_slice(),
            self.offset
        )
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.shape.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_layout() {
        let layout = Layout::contiguous(&[2, 3, 4]);
        assert_eq!(layout.shape(), &[2, 3, 4]);
        assert_eq!(layout.strides(), &[12, 4, 1]);
        assert_eq!(layout.elem_count(), 24);
        assert!(layout.is_contiguous());
    }

    #[test]
    fn test_scalar_layout() {
        let layout = Layout::scalar();
        assert!(layout.is_scalar());
        assert_eq!(layout.elem_count(), 1);
        assert!(layout.is_contiguous());
        assert_eq!(layout.positions().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_permute() {
        let layout = Layout::contiguous(&[2, 3, 4]);
        let permuted = layout.permute(&[0, 2, 1]).unwrap();
        assert_eq!(permuted.shape(), &[2, 4, 3]);
        assert_eq!(permuted.strides(), &[12, 1, 4]);
        assert!(!permuted.is_contiguous());
        assert!(layout.permute(&[0, 0, 1]).is_none());
        assert!(layout.permute(&[0, 1]).is_none());
    }

    #[test]
    fn test_reshape() {
        let layout = Layout::contiguous(&[2, 3, 4]);
        let reshaped = layout.reshape(&[6, 4]).unwrap();
        assert_eq!(reshaped.shape(), &[6, 4]);
        assert_eq!(reshaped.strides(), &[4, 1]);
        assert!(layout.reshape(&[5, 5]).is_none());

        let transposed = layout.permute(&[2, 1, 0]).unwrap();
        assert!(transposed.reshape(&[24]).is_none());
    }

    #[test]
    fn test_squeeze_unsqueeze() {
        let layout = Layout::contiguous(&[1, 3, 1, 4]);
        let squeezed = layout.squeeze(None).unwrap();
        assert_eq!(squeezed.shape(), &[3, 4]);

        let one = layout.squeeze(Some(2)).unwrap();
        assert_eq!(one.shape(), &[1, 3, 4]);
        assert!(layout.squeeze(Some(1)).is_none());

        let base = Layout::contiguous(&[3, 4]);
        let unsqueezed = base.unsqueeze(1).unwrap();
        assert_eq!(unsqueezed.shape(), &[3, 1, 4]);
        assert!(unsqueezed.is_contiguous());
        assert_eq!(base.unsqueeze(2).unwrap().shape(), &[3, 4, 1]);
        assert!(base.unsqueeze(3).is_none());
    }

    #[test]
    fn test_slice_and_positions() {
        let layout = Layout::contiguous(&[2, 5]);
        let sliced = layout.slice(1, 1, 5, 2).unwrap();
        assert_eq!(sliced.shape(), &[2, 2]);
        assert_eq!(sliced.positions().collect::<Vec<_>>(), vec![1, 3, 6, 8]);

        let empty = layout.slice(1, 3, 2, 1).unwrap();
        assert_eq!(empty.elem_count(), 0);
        assert_eq!(empty.positions().count(), 0);

        assert!(layout.slice(1, 0, 5, 0).is_none());
        assert!(layout.slice(2, 0, 1, 1).is_none());
    }

    #[test]
    fn test_select_and_index() {
        let layout = Layout::contiguous(&[3, 4]);
        let row = layout.select(0, 2).unwrap();
        assert_eq!(row.shape(), &[4]);
        assert_eq!(row.offset(), 8);
        assert!(row.is_contiguous());

        assert_eq!(layout.index(&[1, 2]), Some(6));
        assert_eq!(layout.index(&[3, 0]), None);
        assert_eq!(layout.index(&[1]), None);
    }

    #[test]
    fn test_positions_of_transpose() {
        let layout = Layout::contiguous(&[2, 3]).permute(&[1, 0]).unwrap();
        assert_eq!(layout.positions().collect::<Vec<_>>(), vec![0, 3, 1, 4, 2, 5]);
        assert_eq!(layout.required_len(), 6);
    }
}
