use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// Sum of two operands (suma).
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// `a` minus `b` (resta).
pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

/// An operand or result that may be an integer or a float.
///
/// Integer arithmetic that leaves the `i64` range is promoted to `Float`
/// rather than wrapping, so `add` and `subtract` stay total over `Number`.
/// Mixing variants yields `Float`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map(Self::Int)
                .unwrap_or_else(|| Self::Float((a as i128 + b as i128) as f64)),
            (a, b) => Self::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_sub(b)
                .map(Self::Int)
                .unwrap_or_else(|| Self::Float((a as i128 - b as i128) as f64)),
            (a, b) => Self::Float(a.as_f64() - b.as_f64()),
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Self::Int(i) => i
                .checked_neg()
                .map(Self::Int)
                .unwrap_or_else(|| Self::Float(-(i as i128) as f64)),
            Self::Float(f) => Self::Float(-f),
        }
    }
}

// Exact numeric comparison: Int(3) == Float(3.0), but an Int is never
// rounded to meet a Float, so Int(2^53 + 1) != Float(2^53).
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => int_eq_float(i, f),
        }
    }
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

fn int_eq_float(i: i64, f: f64) -> bool {
    f.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&f) && f as i64 == i
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Self::Int(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Self::Float(f)),
            _ => Err(Error::parse(format!("not a number: {s:?}"))),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) if *x == 0.0 || (1e-7..1e21).contains(&x.abs()) => write!(f, "{x}"),
            Self::Float(x) => write!(f, "{x:e}"),
        }
    }
}
