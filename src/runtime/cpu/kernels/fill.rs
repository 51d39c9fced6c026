//! Sequence and pattern fill kernels

use crate::dtype::{DType, Element};
use crate::tensor::cast_value;

/// Fill with `start + step * i`, cast to `dtype` (bool stores `value != 0`)
pub fn arange_kernel<T: Element>(out: &mut [T], start: f64, step: f64, dtype: DType) {
    for (i, elem) in out.iter_mut().enumerate() {
        *elem = cast_value::<T>(start + step * i as f64, dtype);
    }
}

/// Fill with evenly spaced values from start to stop (inclusive)
///
/// Generates values `start + i * (stop - start) / (len - 1)`; a single
/// element is `start`. Values are cast to `dtype` like [`arange_kernel`].
pub fn linspace_kernel<T: Element>(out: &mut [T], start: f64, stop: f64, dtype: DType) {
    let steps = out.len();
    if steps == 1 {
        out[0] = cast_value::<T>(start, dtype);
        return;
    }
    let step = (stop - start) / (steps - 1) as f64;
    for (i, elem) in out.iter_mut().enumerate() {
        *elem = cast_value::<T>(start + step * i as f64, dtype);
    }
}

/// Fill an `n x m` row-major block with the identity pattern
pub fn eye_kernel<T: Element>(out: &mut [T], n: usize, m: usize) {
    debug_assert_eq!(out.len(), n * m);
    out.fill(T::zero());
    for i in 0..n.min(m) {
        out[i * m + i] = T::one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arange_kernel() {
        let mut out = [0i32; 5];
        arange_kernel(&mut out, 0.0, 2.0, DType::I32);
        assert_eq!(out, [0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_linspace_kernel() {
        let mut out = [0.0f64; 5];
        linspace_kernel(&mut out, 0.0, 1.0, DType::F64);
        assert_eq!(out, [0.0, 0.25, 0.5, 0.75, 1.0]);

        let mut one = [0.0f32; 1];
        linspace_kernel(&mut one, 3.0, 9.0, DType::F32);
        assert_eq!(one, [3.0]);
    }

    #[test]
    fn test_bool_fills_store_zero_or_one() {
        let mut out = [7u8; 4];
        arange_kernel(&mut out, 0.0, 1.0, DType::Bool);
        assert_eq!(out, [0, 1, 1, 1]);
        linspace_kernel(&mut out, -1.0, 2.0, DType::Bool);
        assert_eq!(out, [1, 0, 1, 1]);
    }

    #[test]
    fn test_eye_kernel() {
        let mut out = [9u8; 6];
        eye_kernel(&mut out, 2, 3);
        assert_eq!(out, [1, 0, 0, 0, 1, 0]);
    }
}
