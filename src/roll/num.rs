use crate::common::*;
use serde::Serialize;
use std::fmt;

/// The numeric reading of a value. Integer arithmetic that overflows, or division that is
/// not exact, produces a float.
#[derive(Debug, Copy, Clone, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(Int),
    Float(Float),
}

impl Number {
    /// Truncates toward zero. `NaN` reads as zero and infinities saturate.
    pub fn as_int(self) -> Int {
        match self {
            Self::Int(x) => x,
            Self::Float(x) => x as Int,
        }
    }

    pub fn as_float(self) -> Float {
        match self {
            Self::Int(x) => x as Float,
            Self::Float(x) => x,
        }
    }
}

macro_rules! val_impl_bin_op {
    ($Name:ident, $fn_name:ident, $checked:ident) => {
        impl std::ops::$Name for Number {
            type Output = Self;

            fn $fn_name(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Self::Int(x), Self::Int(y)) => x.$checked(y).map_or_else(
                        || Self::Float(std::ops::$Name::$fn_name(x as Float, y as Float)),
                        Self::Int,
                    ),
                    (x, y) => Self::Float(std::ops::$Name::$fn_name(x.as_float(), y.as_float())),
                }
            }
        }
    };
}

val_impl_bin_op!(Add, add, checked_add);
val_impl_bin_op!(Sub, sub, checked_sub);
val_impl_bin_op!(Mul, mul, checked_mul);

impl std::ops::Div for Number {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Int(x), Self::Int(y)) if x.checked_rem(y) == Some(0) => Self::Int(x / y),
            (x, y) => Self::Float(x.as_float() / y.as_float()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(x), Self::Int(y)) => x == y,
            (x, y) => x.as_float().eq(&y.as_float()),
        }
    }
}

impl From<Int> for Number {
    fn from(x: Int) -> Self {
        Self::Int(x)
    }
}

impl From<Float> for Number {
    fn from(x: Float) -> Self {
        Self::Float(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(x) => fmt::Display::fmt(x, f),
            Self::Float(x) => fmt::Debug::fmt(x, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_arithmetic() {
        assert_eq!(Number::Int(3) + Number::Int(2), Number::Int(5));
        assert_eq!(Number::Int(3) - Number::Int(5), Number::Int(-2));
        assert_eq!(Number::Int(4) * Number::Int(6), Number::Int(24));
        assert!(matches!(Number::Int(Int::MAX) + Number::Int(1), Number::Float(_)));
    }

    #[test]
    fn test_division() {
        assert!(matches!(Number::Int(6) / Number::Int(2), Number::Int(3)));
        assert_eq!(Number::Int(7) / Number::Int(2), Number::Float(3.5));
        assert_eq!(Number::Int(1) / Number::Int(0), Number::Float(Float::INFINITY));
        assert_eq!(Number::Int(-1) / Number::Int(0), Number::Float(Float::NEG_INFINITY));
        assert!((Number::Int(0) / Number::Int(0)).as_float().is_nan());
        assert!(matches!(Number::Int(Int::MIN) / Number::Int(-1), Number::Float(_)));
    }

    #[test]
    fn test_as_int() {
        assert_eq!(Number::Float(3.9).as_int(), 3);
        assert_eq!(Number::Float(-3.9).as_int(), -3);
        assert_eq!(Number::Float(Float::NAN).as_int(), 0);
        assert_eq!(Number::Float(Float::INFINITY).as_int(), Int::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(12).to_string(), "12");
        assert_eq!(Number::Float(3.5).to_string(), "3.5");
        assert_eq!(Number::Float(Float::INFINITY).to_string(), "inf");
        assert_eq!(Number::Float(Float::NAN).to_string(), "NaN");
    }
}
