//! Numeric values entered at the prompt and produced by the operations.
//!
//! A value is either integral or fractional. Whole-valued reals collapse to
//! the integral form so they never display a trailing `.0`.

use std::fmt;
use std::str::FromStr;

use calc_common::CalcError;

/// A signed number that is either an integer or a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    /// Build a number from a real, collapsing whole finite values that fit in
    /// an `i64` into [`Number::Int`].
    pub fn normalize(value: f64) -> Self {
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Number::Int(value as i64)
        } else {
            Number::Real(value)
        }
    }

    /// Re-apply [`Number::normalize`] to a real; integers are returned as-is.
    pub fn normalized(self) -> Self {
        match self {
            Number::Int(_) => self,
            Number::Real(v) => Number::normalize(v),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Real(v) => v,
        }
    }

    /// True for `0`, `0.0` and `-0.0`.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Real(v) => v == 0.0,
        }
    }

    pub fn is_integral(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Apply a binary operation, staying integral while the checked integer
    /// operation succeeds and falling back to reals otherwise.
    pub(crate) fn combine(
        self,
        other: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        real_op: fn(f64, f64) -> f64,
    ) -> Number {
        if let (Number::Int(a), Number::Int(b)) = (self, other) {
            if let Some(v) = int_op(a, b) {
                return Number::Int(v);
            }
        }
        Number::Real(real_op(self.as_f64(), other.as_f64()))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Real(v) if v.is_nan() => f.write_str("nan"),
            Number::Real(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for Number {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        text.parse::<f64>()
            .map(Number::normalize)
            .map_err(|_| CalcError::InvalidNumericInput(text.to_string()))
    }
}
