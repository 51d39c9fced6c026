//! Data type system for tensr tensors
//!
//! This module provides the `DType` enum representing all supported element types,
//! the `Element` capability traits mapping Rust primitives onto it, and the
//! `DTypeSet` bitset used by operations to declare which dtypes they accept.

mod element;

pub use element::{Element, Float, Numeric};

use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Data types supported by tensr tensors
///
/// A tensor's dtype is fixed at creation and never promoted implicitly.
///
/// # Discriminant Values (Serialization Stability)
///
/// The discriminant values double as the on-disk dtype tag and are **stable**:
/// F32=0, F64=1, I32=2, I64=3, U8=4, Bool=5.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    /// 32-bit floating point (default for random fills)
    F32 = 0,
    /// 64-bit floating point
    F64 = 1,
    /// 32-bit signed integer
    I32 = 2,
    /// 64-bit signed integer (index results)
    I64 = 3,
    /// 8-bit unsigned integer
    U8 = 4,
    /// Boolean type, stored as one byte holding 0 or 1
    Bool = 5,
}

impl DType {
    /// All dtypes in tag order
    pub const ALL: [DType; 6] = [
        DType::F32,
        DType::F64,
        DType::I32,
        DType::I64,
        DType::U8,
        DType::Bool,
    ];

    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 | Self::I64 => 8,
            Self::F32 | Self::I32 => 4,
            Self::U8 | Self::Bool => 1,
        }
    }

    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32)
    }

    /// Returns true if this is a signed integer type
    #[inline]
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::I64 | Self::I32)
    }

    /// Returns true if this is any integer type (signed or unsigned)
    #[inline]
    pub const fn is_int(self) -> bool {
        self.is_signed_int() || matches!(self, Self::U8)
    }

    /// Returns true if this is a boolean type
    #[inline]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    /// Stable numeric tag used by the binary codec
    #[inline]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Look up a dtype by its codec tag
    pub const fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(Self::F32),
            1 => Some(Self::F64),
            2 => Some(Self::I32),
            3 => Some(Self::I64),
            4 => Some(Self::U8),
            5 => Some(Self::Bool),
            _ => None,
        }
    }

    /// Full name for display (e.g., "float32", "int64")
    pub const fn name(self) -> &'static str {
        match self {
            Self::F32 => "float32",
            Self::F64 => "float64",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::U8 => "uint8",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of dtypes for efficient membership testing
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DTypeSet {
    bits: u8,
}

impl DTypeSet {
    /// Empty set
    pub const EMPTY: Self = Self { bits: 0 };

    /// All floating point types
    pub const FLOATS: Self = Self {
        bits: (1 << DType::F64 as u8) | (1 << DType::F32 as u8),
    };

    /// Signed integer types
    pub const SIGNED_INTS: Self = Self {
        bits: (1 << DType::I64 as u8) | (1 << DType::I32 as u8),
    };

    /// All integer types
    pub const INTS: Self = Self {
        bits: Self::SIGNED_INTS.bits | (1 << DType::U8 as u8),
    };

    /// All numeric types (floats + ints)
    pub const NUMERIC: Self = Self {
        bits: Self::FLOATS.bits | Self::INTS.bits,
    };

    /// Create a set containing a single dtype
    #[inline]
    pub const fn single(dtype: DType) -> Self {
        Self {
            bits: 1 << dtype as u8,
        }
    }

    /// Check if the set contains a dtype
    #[inline]
    pub const fn contains(self, dtype: DType) -> bool {
        self.bits & (1 << dtype as u8) != 0
    }

    /// Union of two sets
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Check if set is empty
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Fail with `UnsupportedOperation` unless `dtype` is a member
    pub fn require(self, dtype: DType, op: &'static str) -> crate::error::Result<()> {
        if self.contains(dtype) {
            Ok(())
        } else {
            Err(crate::error::Error::unsupported(op, dtype))
        }
    }
}
