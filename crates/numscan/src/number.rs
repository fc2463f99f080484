//! Concrete numeric values.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive};

/// 2^63 as an `f64`; the exclusive upper bound of `i64` and the magnitude of
/// its lower bound.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// An integer or float produced by a conversion.
///
/// Integers that fit `i64` are always stored as [`Number::Int`]; only
/// values outside that range use [`Number::BigInt`].
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    BigInt(BigInt),
    Float(f64),
}

impl Number {
    /// Store an arbitrary-width integer, narrowing it to `Int` when it fits.
    pub fn from_bigint(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(small) => Self::Int(small),
            Err(_) => Self::BigInt(value),
        }
    }

    /// Integer value of `value` truncated toward zero.
    ///
    /// `None` for infinity and NaN.
    pub fn from_f64_truncated(value: f64) -> Option<Self> {
        if value.is_finite() {
            Self::from_integral_f64(value.trunc())
        } else {
            None
        }
    }

    /// Integer value of `value` if it converts losslessly.
    ///
    /// `None` for infinity, NaN and anything with a fractional part.
    pub fn from_f64_integral(value: f64) -> Option<Self> {
        if value.is_finite() && value == value.floor() {
            Self::from_integral_f64(value)
        } else {
            None
        }
    }

    fn from_integral_f64(value: f64) -> Option<Self> {
        if (-I64_BOUND..I64_BOUND).contains(&value) {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "value is integral and within i64 range"
            )]
            let value = value as i64;
            Some(Self::Int(value))
        } else {
            BigInt::from_f64(value).map(Self::BigInt)
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int(_) | Self::BigInt(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Nearest `f64`. Integers too large for `f64` become a signed infinity.
    pub fn to_f64(&self) -> f64 {
        match self {
            #[allow(
                clippy::cast_precision_loss,
                reason = "rounding to nearest is the intended conversion"
            )]
            Self::Int(value) => *value as f64,
            Self::BigInt(value) => value.to_f64().unwrap_or(if value.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Self::Float(value) => *value,
        }
    }

    /// Widen an integer to a float; floats are returned unchanged.
    #[must_use]
    pub fn into_float(self) -> Self {
        match self {
            Self::Float(_) => self,
            _ => Self::Float(self.to_f64()),
        }
    }

    /// Arithmetic negation. `-i64::MIN` is promoted to `BigInt`.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Int(value) => value
                .checked_neg()
                .map_or_else(|| Self::BigInt(-BigInt::from(value)), Self::Int),
            Self::BigInt(value) => Self::from_bigint(-value),
            Self::Float(value) => Self::Float(-value),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::from_bigint(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::BigInt(value) => write!(f, "{value}"),
            Self::Float(value) if value.is_nan() => f.write_str("nan"),
            // Debug keeps the `.0` on integral values and uses exponents
            // for large magnitudes.
            Self::Float(value) => write!(f, "{value:?}"),
        }
    }
}
