//! Error types for tensr

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using tensr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tensr operations
///
/// Every contract violation is reported through one of these variants at the
/// point where it is detected. Nothing is retried or repaired implicitly.
#[derive(Error, Debug)]
pub enum Error {
    /// A buffer (or its metadata) could not be allocated
    #[error("Allocation failure: could not allocate {size} bytes")]
    AllocationFailure {
        /// Requested size in bytes (saturated on overflow)
        size: usize,
    },

    /// Shape or element-count mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// DType mismatch between operands
    #[error("DType mismatch: {lhs} vs {rhs}")]
    DTypeMismatch {
        /// Left-hand side dtype
        lhs: DType,
        /// Right-hand side dtype
        rhs: DType,
    },

    /// Axis outside `[0, ndim)`
    #[error("Invalid axis {axis} for tensor with {ndim} dimensions")]
    InvalidAxis {
        /// The invalid axis
        axis: usize,
        /// Number of dimensions
        ndim: usize,
    },

    /// The matrix is singular (or numerically so) for the requested operation
    #[error("Singular matrix in '{op}'")]
    SingularMatrix {
        /// The operation name
        op: &'static str,
    },

    /// Underlying I/O failure while reading or writing a tensor file
    #[error("I/O error while {context}: {source}")]
    Io {
        /// What the codec was doing
        context: &'static str,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// A tensor file declared a dtype tag that is not recognized
    #[error("Unrecognized dtype tag {tag} in tensor file")]
    UnknownDTypeTag {
        /// The tag read from the file
        tag: u32,
    },

    /// The operation is not defined for this dtype
    #[error("Unsupported operation '{op}' for dtype {dtype}")]
    UnsupportedOperation {
        /// The operation name
        op: &'static str,
        /// The offending dtype
        dtype: DType,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// An iterative algorithm exhausted its iteration budget
    #[error("'{op}' did not converge after {iterations} iterations")]
    NoConvergence {
        /// The operation name
        op: &'static str,
        /// Iterations performed
        iterations: usize,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(op: &'static str, dtype: DType) -> Self {
        Self::UnsupportedOperation { op, dtype }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error with the codec step that produced it
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    /// Returns true for the I/O family (open, short read, bad dtype tag)
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::UnknownDTypeTag { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::shape_mismatch(&[2, 3], &[3, 2]);
        assert_eq!(err.to_string(), "Shape mismatch: expected [2, 3], got [3, 2]");

        let err = Error::unsupported("sqrt", DType::I32);
        assert_eq!(
            err.to_string(),
            "Unsupported operation 'sqrt' for dtype int32"
        );
    }

    #[test]
    fn test_io_family() {
        let short = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
        assert!(Error::io("reading shape", short).is_io());
        assert!(Error::UnknownDTypeTag { tag: 9 }.is_io());
        assert!(!Error::SingularMatrix { op: "inv" }.is_io());
    }
}
