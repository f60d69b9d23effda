//! # Number
//!
//! The operand and result type of every operation.
//!
//! Integer literals stay exact (`i128`) so that sums, products and powers
//! of whole numbers come back as whole numbers. Anything involving a
//! floating-point operand, a division or a root is carried as `f64`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A real number, either exact integer or IEEE-754 double
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Exact whole number
    Integer(i128),
    /// Floating-point value
    Real(f64),
}

impl Number {
    /// Value as `f64` (lossy for integers beyond 2^53)
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Real(r) => r,
        }
    }

    /// True for `0`, `0.0` and `-0.0`
    pub fn is_zero(&self) -> bool {
        match *self {
            Number::Integer(i) => i == 0,
            Number::Real(r) => r == 0.0,
        }
    }

    /// True if the value has no fractional part.
    ///
    /// Infinities and NaN are not integral.
    pub fn is_integral(&self) -> bool {
        match *self {
            Number::Integer(_) => true,
            Number::Real(r) => r.is_finite() && r.fract() == 0.0,
        }
    }

    /// Strictly below zero (`-0.0` and NaN are not negative)
    pub fn is_negative(&self) -> bool {
        match *self {
            Number::Integer(i) => i < 0,
            Number::Real(r) => r < 0.0,
        }
    }

    /// Finite check; integers are always finite
    pub fn is_finite(&self) -> bool {
        match *self {
            Number::Integer(_) => true,
            Number::Real(r) => r.is_finite(),
        }
    }
}

/// A plain JSON number when finite. JSON has no spelling for `inf` or
/// `NaN`, so those are written as the same strings `Display` prints.
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Integer(i) => serializer.serialize_i128(i),
            Number::Real(r) if r.is_finite() => serializer.serialize_f64(r),
            Number::Real(_) => serializer.collect_str(self),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(i) => write!(f, "{}", i),
            // Rust prints `10.0_f64` as "10"; keep the fractional marker so
            // a real never reads like an integer.
            Number::Real(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{:.1}", r),
            Number::Real(r) => write!(f, "{}", r),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value.into())
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

/// Failure to read a number from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid number: {0:?}")]
pub struct ParseNumberError(pub String);

impl FromStr for Number {
    type Err = ParseNumberError;

    /// Integer literals parse exactly; everything `f64` accepts
    /// (`1.5`, `1e3`, `inf`, `NaN`) parses as a real.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(i) = s.parse::<i128>() {
            return Ok(Number::Integer(i));
        }

        s.parse::<f64>()
            .map(Number::Real)
            .map_err(|_| ParseNumberError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integer() {
        assert_eq!(Number::Integer(30).to_string(), "30");
        assert_eq!(Number::Integer(-10).to_string(), "-10");
        assert_eq!(
            Number::Integer(100_000_000_000_000_000_000).to_string(),
            "100000000000000000000"
        );
    }

    #[test]
    fn test_display_real_keeps_fraction_marker() {
        assert_eq!(Number::Real(10.0).to_string(), "10.0");
        assert_eq!(Number::Real(-3.0).to_string(), "-3.0");
        assert_eq!(Number::Real(0.5).to_string(), "0.5");
        assert_eq!(Number::Real(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::Real(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<Number>().unwrap(), Number::Integer(42));
        assert_eq!(" -7 ".parse::<Number>().unwrap(), Number::Integer(-7));
        assert_eq!("2.5".parse::<Number>().unwrap(), Number::Real(2.5));
        assert_eq!("1e3".parse::<Number>().unwrap(), Number::Real(1000.0));
        assert!("ten".parse::<Number>().is_err());
        assert!("".parse::<Number>().is_err());
    }

    #[test]
    fn test_predicates() {
        assert!(Number::Integer(0).is_zero());
        assert!(Number::Real(-0.0).is_zero());
        assert!(!Number::Real(-0.0).is_negative());
        assert!(Number::Real(4.0).is_integral());
        assert!(!Number::Real(4.5).is_integral());
        assert!(!Number::Real(f64::INFINITY).is_integral());
        assert!(!Number::Real(f64::NAN).is_negative());
        assert!(Number::Integer(-1).is_negative());
    }

    #[test]
    fn test_serialize_as_plain_json_number() {
        assert_eq!(serde_json::to_string(&Number::Integer(200)).unwrap(), "200");
        assert_eq!(serde_json::to_string(&Number::Real(0.5)).unwrap(), "0.5");
    }

    #[test]
    fn test_serialize_non_finite_as_string() {
        assert_eq!(serde_json::to_string(&Number::Real(f64::INFINITY)).unwrap(), r#""inf""#);
        assert_eq!(serde_json::to_string(&Number::Real(f64::NEG_INFINITY)).unwrap(), r#""-inf""#);
        assert_eq!(serde_json::to_string(&Number::Real(f64::NAN)).unwrap(), r#""NaN""#);
    }
}
