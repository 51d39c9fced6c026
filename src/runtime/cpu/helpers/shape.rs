//! Joining helpers for CPU tensors

use crate::dispatch_dtype;
use crate::error::{Error, Result};
use crate::runtime::validate_binary_dtypes;
use crate::tensor::Tensor;

/// Validated parameters for a concatenation
struct CatParams {
    out_shape: Vec<usize>,
    outer_size: usize,
    inner_size: usize,
    cat_dim_total: usize,
}

fn validate_cat(tensors: &[&Tensor], axis: usize) -> Result<CatParams> {
    let first = tensors
        .first()
        .ok_or_else(|| Error::invalid_argument("tensors", "need at least one tensor"))?;
    first.check_axis(axis)?;

    let ref_shape = first.shape();
    let mut cat_dim_total = 0usize;
    for t in tensors {
        validate_binary_dtypes(first, t)?;
        let compatible = t.ndim() == first.ndim()
            && t
                .shape()
                .iter()
                .zip(ref_shape.iter())
                .enumerate()
                .all(|(d, (&s, &r))| d == axis || s == r);
        if !compatible {
            return Err(Error::shape_mismatch(ref_shape, t.shape()));
        }
        cat_dim_total += t.shape()[axis];
    }

    let mut out_shape = ref_shape.to_vec();
    out_shape[axis] = cat_dim_total;

    Ok(CatParams {
        outer_size: ref_shape[..axis].iter().product(),
        inner_size: ref_shape[axis + 1..].iter().product(),
        cat_dim_total,
        out_shape,
    })
}

/// Concatenate tensors along an existing axis
///
/// All inputs must share dtype and every extent except `axis`.
pub fn cat_impl(tensors: &[&Tensor], axis: usize) -> Result<Tensor> {
    let params = validate_cat(tensors, axis)?;
    let first = tensors[0];
    let dtype = first.dtype();
    let out = Tensor::empty(&params.out_shape, dtype, first.device())?;

    dispatch_dtype!(dtype, T => {
        out.write_values::<T, _>(|dst| {
            let mut cat_offset = 0usize;
            for t in tensors {
                let src_cat_size = t.shape()[axis];
                let block = src_cat_size * params.inner_size;
                t.with_values::<T, _>(|src| {
                    for outer in 0..params.outer_size {
                        let src_base = outer * block;
                        let dst_base = (outer * params.cat_dim_total + cat_offset) * params.inner_size;
                        dst[dst_base..dst_base + block].copy_from_slice(&src[src_base..src_base + block]);
                    }
                });
                cat_offset += src_cat_size;
            }
        });
    }, "concat");

    Ok(out)
}

/// Stack equally shaped tensors along a new axis (`0..=ndim`)
pub fn stack_impl(tensors: &[&Tensor], axis: usize) -> Result<Tensor> {
    let first = tensors
        .first()
        .ok_or_else(|| Error::invalid_argument("tensors", "need at least one tensor"))?;
    for t in tensors {
        if t.shape() != first.shape() {
            return Err(Error::shape_mismatch(first.shape(), t.shape()));
        }
    }

    // stack(tensors, axis) = concat([t.expand_dims(axis) for t in tensors], axis)
    let expanded: Vec<Tensor> = tensors
        .iter()
        .map(|t| t.expand_dims(axis))
        .collect::<Result<_>>()?;
    let refs: Vec<&Tensor> = expanded.iter().collect();
    cat_impl(&refs, axis)
}

/// Stack row-wise: 1-D inputs become rows, then concatenate along axis 0
pub fn vstack_impl(tensors: &[&Tensor]) -> Result<Tensor> {
    let rows: Vec<Tensor> = tensors
        .iter()
        .map(|t| match t.ndim() {
            0 => t.reshape(&[1, 1]),
            1 => t.expand_dims(0),
            _ => Ok((*t).clone()),
        })
        .collect::<Result<_>>()?;
    let refs: Vec<&Tensor> = rows.iter().collect();
    cat_impl(&refs, 0)
}

/// Stack column-wise: 1-D inputs join along axis 0, others along axis 1
pub fn hstack_impl(tensors: &[&Tensor]) -> Result<Tensor> {
    let cols: Vec<Tensor> = tensors
        .iter()
        .map(|t| if t.ndim() == 0 { t.reshape(&[1]) } else { Ok((*t).clone()) })
        .collect::<Result<_>>()?;
    let refs: Vec<&Tensor> = cols.iter().collect();
    let axis = match refs.first() {
        Some(t) if t.ndim() == 1 => 0,
        _ => 1,
    };
    cat_impl(&refs, axis)
}
