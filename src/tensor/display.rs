//! Human-readable rendering of tensors

use super::Tensor;
use crate::dtype::{DType, Element};
use std::fmt;

/// Options controlling how tensor data is rendered
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    /// Data is shown only when the tensor has at most this many elements
    pub threshold: usize,
    /// Decimal places for floating point values
    pub precision: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            threshold: 100,
            precision: 4,
        }
    }
}

/// A tensor paired with print options, implementing `Display`
pub struct TensorDisplay<'a> {
    tensor: &'a Tensor,
    options: PrintOptions,
}

impl Tensor {
    /// Render with custom print options
    pub fn display_with(&self, options: PrintOptions) -> TensorDisplay<'_> {
        TensorDisplay {
            tensor: self,
            options,
        }
    }

    /// Print to stdout using the default options
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for TensorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.tensor;
        write!(
            f,
            "Tensor(shape={:?}, dtype={}, device={})",
            t.shape(),
            t.dtype(),
            t.device()
        )?;

        if t.numel() > self.options.threshold {
            return Ok(());
        }

        f.write_str("\nData: [")?;
        let precision = self.options.precision;
        match t.dtype() {
            DType::F32 => write_values::<f32>(f, t, |f, x| write!(f, "{:.*}", precision, x))?,
            DType::F64 => write_values::<f64>(f, t, |f, x| write!(f, "{:.*}", precision, x))?,
            DType::Bool => write_values::<u8>(f, t, |f, x| write!(f, "{}", x != 0))?,
            DType::U8 => write_values::<u8>(f, t, |f, x| write!(f, "{}", x))?,
            DType::I32 => write_values::<i32>(f, t, |f, x| write!(f, "{}", x))?,
            DType::I64 => write_values::<i64>(f, t, |f, x| write!(f, "{}", x))?,
        }
        f.write_str("]")
    }
}

/// Write the elements in their native type, comma separated
fn write_values<T: Element>(
    f: &mut fmt::Formatter<'_>,
    t: &Tensor,
    mut write_one: impl FnMut(&mut fmt::Formatter<'_>, T) -> fmt::Result,
) -> fmt::Result {
    t.with_values::<T, _>(|values| {
        for (i, &x) in values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_one(f, x)?;
        }
        Ok(())
    })
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(PrintOptions::default()).fmt(f)
    }
}
