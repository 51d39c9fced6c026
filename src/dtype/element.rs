//! Element traits for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};

/// Trait for types that can be elements of a tensor
///
/// This trait connects Rust's type system to tensr's runtime dtype system.
/// It's implemented for the five primitive storage types; `DType::Bool` is
/// stored as `u8` holding 0 or 1.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe reinterpretation of the byte buffer (bytemuck)
/// - `PartialOrd` - Comparison and max/min reductions
pub trait Element:
    Copy + Send + Sync + Pod + Zeroable + PartialOrd + std::fmt::Debug + 'static
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type with standard truncating (`as`) semantics
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;
}

/// Arithmetic capability shared by every numeric dtype.
///
/// Integer arithmetic wraps on overflow; division reports a zero divisor
/// by returning `None` instead of panicking.
pub trait Numeric: Element {
    /// `self + rhs`
    fn add_elem(self, rhs: Self) -> Self;
    /// `self - rhs`
    fn sub_elem(self, rhs: Self) -> Self;
    /// `self * rhs`
    fn mul_elem(self, rhs: Self) -> Self;
    /// `self / rhs`, `None` for an integer division by zero
    fn div_elem(self, rhs: Self) -> Option<Self>;
    /// Absolute value (identity for unsigned types)
    fn abs_elem(self) -> Self;
    /// Negation, `None` for unsigned types
    fn neg_elem(self) -> Option<Self>;
}

/// Floating point elements: the dtypes that support transcendental math.
pub trait Float: Numeric + num_traits::Float {
    /// Machine epsilon as f64
    fn epsilon_f64() -> f64;
}

macro_rules! impl_element {
    ($t:ty, $dtype:expr, $zero:expr, $one:expr) => {
        impl Element for $t {
            const DTYPE: DType = $dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn zero() -> Self {
                $zero
            }

            #[inline]
            fn one() -> Self {
                $one
            }
        }
    };
}

impl_element!(f32, DType::F32, 0.0, 1.0);
impl_element!(f64, DType::F64, 0.0, 1.0);
impl_element!(i32, DType::I32, 0, 1);
impl_element!(i64, DType::I64, 0, 1);
impl_element!(u8, DType::U8, 0, 1);

macro_rules! impl_numeric_float {
    ($t:ty) => {
        impl Numeric for $t {
            #[inline]
            fn add_elem(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline]
            fn sub_elem(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline]
            fn mul_elem(self, rhs: Self) -> Self {
                self * rhs
            }
            #[inline]
            fn div_elem(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }
            #[inline]
            fn abs_elem(self) -> Self {
                self.abs()
            }
            #[inline]
            fn neg_elem(self) -> Option<Self> {
                Some(-self)
            }
        }

        impl Float for $t {
            #[inline]
            fn epsilon_f64() -> f64 {
                <$t>::EPSILON as f64
            }
        }
    };
}

impl_numeric_float!(f32);
impl_numeric_float!(f64);

macro_rules! impl_numeric_signed {
    ($t:ty) => {
        impl Numeric for $t {
            #[inline]
            fn add_elem(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
            #[inline]
            fn sub_elem(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
            #[inline]
            fn mul_elem(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
            #[inline]
            fn div_elem(self, rhs: Self) -> Option<Self> {
                if rhs == 0 {
                    None
                } else {
                    Some(self.wrapping_div(rhs))
                }
            }
            #[inline]
            fn abs_elem(self) -> Self {
                self.wrapping_abs()
            }
            #[inline]
            fn neg_elem(self) -> Option<Self> {
                Some(self.wrapping_neg())
            }
        }
    };
}

impl_numeric_signed!(i32);
impl_numeric_signed!(i64);

impl Numeric for u8 {
    #[inline]
    fn add_elem(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
    #[inline]
    fn sub_elem(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
    #[inline]
    fn mul_elem(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
    #[inline]
    fn div_elem(self, rhs: Self) -> Option<Self> {
        self.checked_div(rhs)
    }
    #[inline]
    fn abs_elem(self) -> Self {
        self
    }
    #[inline]
    fn neg_elem(self) -> Option<Self> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncating_conversion() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(u8::from_f64(-1.0), 0);
        assert_eq!(f32::from_f64(0.5), 0.5);
    }

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(i32::MAX.add_elem(1), i32::MIN);
        assert_eq!(200u8.mul_elem(2), 144);
        assert_eq!(7i64.div_elem(2), Some(3));
        assert_eq!(7i64.div_elem(0), None);
        assert_eq!(5u8.div_elem(0), None);
    }

    #[test]
    fn test_abs_and_neg() {
        assert_eq!((-3i32).abs_elem(), 3);
        assert_eq!(i32::MIN.abs_elem(), i32::MIN);
        assert_eq!(9u8.abs_elem(), 9);
        assert_eq!(9u8.neg_elem(), None);
        assert_eq!(2.5f64.neg_elem(), Some(-2.5));
    }
}
