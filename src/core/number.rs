//! Scalar values held by constant leaves.
//!
//! Constants and variables are generic over the caller's numeric type at
//! construction time (`Expr::constant::<i32>`, `Expr::variable::<f64>`), but the
//! tree itself stores a closed [`Number`] so that every node has one concrete type.

use num_traits::{Float, Num};
use std::fmt::{self, Debug, Display};

/// Category of the numeric type a constant or variable was declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Signed integer (`i8` .. `i64`, `isize`)
    Int,
    /// Unsigned integer (`u8` .. `u64`, `usize`)
    UInt,
    /// Floating point (`f32`, `f64`)
    Float,
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Int => write!(f, "int"),
            ScalarType::UInt => write!(f, "uint"),
            ScalarType::Float => write!(f, "float"),
        }
    }
}

/// A constant value stored in the tree
///
/// Floats keep their source width so `0.1f32` prints as `0.1` rather than the
/// decimal expansion of its widened value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
    Float32(f32),
}

impl Number {
    /// The scalar category this value was built from
    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            Number::Int(_) => ScalarType::Int,
            Number::UInt(_) => ScalarType::UInt,
            Number::Float(_) | Number::Float32(_) => ScalarType::Float,
        }
    }
}

fn fmt_float<F: Float + Display>(f: &mut fmt::Formatter<'_>, n: F) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else {
        // Shortest round-trip text; integral values have no fraction and -0.0 keeps its sign
        write!(f, "{}", n)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::UInt(n) => write!(f, "{}", n),
            Number::Float(n) => fmt_float(f, n),
            Number::Float32(n) => fmt_float(f, n),
        }
    }
}

/// Numeric types accepted by [`Expr::constant`](crate::Expr::constant) and
/// [`Expr::variable`](crate::Expr::variable).
pub trait Scalar: Num + Copy + Debug + Display + 'static {
    /// Category recorded on variables declared with this type
    const TYPE: ScalarType;

    /// Convert into the tree's stored representation
    fn to_number(self) -> Number;
}

macro_rules! impl_scalar {
    ($category:ident, $variant:ident($stored:ty): $($t:ty),+) => {
        $(
            impl Scalar for $t {
                const TYPE: ScalarType = ScalarType::$category;

                #[inline]
                fn to_number(self) -> Number {
                    Number::$variant(self as $stored)
                }
            }
        )+
    };
}

impl_scalar!(Int, Int(i64): i8, i16, i32, i64, isize);
impl_scalar!(UInt, UInt(u64): u8, u16, u32, u64, usize);
impl_scalar!(Float, Float(f64): f64);
impl_scalar!(Float, Float32(f32): f32);
