//! Integer-or-decimal numbers produced by the number grammar
//!
//! Integers stay exact for as long as the arithmetic fits in an `i64`; any
//! overflowing or inexact operation falls back to a decimal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg};

/// A parsed numeric value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Decimal(f64),
}

impl Number {
    /// `10^exponent`, exact while it fits in an `i64`
    pub fn pow10(exponent: u32) -> Self {
        match 10i64.checked_pow(exponent) {
            Some(value) => Self::Integer(value),
            None => Self::Decimal(10f64.powi(exponent as i32)),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self, Self::Decimal(_))
    }

    pub fn integer_value(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Decimal(_) => None,
        }
    }

    pub fn decimal_value(&self) -> Option<f64> {
        match self {
            Self::Integer(_) => None,
            Self::Decimal(value) => Some(*value),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(value) => *value as f64,
            Self::Decimal(value) => *value,
        }
    }

    /// Numerically equal to one, regardless of representation
    pub fn is_one(&self) -> bool {
        self.as_f64() == 1.0
    }

    pub fn is_negative(&self) -> bool {
        self.as_f64() < 0.0
    }

    /// Whether `self` is strictly below `other`
    pub fn less_than(&self, other: Number) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => *a < b,
            _ => self.as_f64() < other.as_f64(),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        if let (Self::Integer(a), Self::Integer(b)) = (self, rhs) {
            if let Some(sum) = a.checked_add(b) {
                return Self::Integer(sum);
            }
        }
        Self::Decimal(self.as_f64() + rhs.as_f64())
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        if let (Self::Integer(a), Self::Integer(b)) = (self, rhs) {
            if let Some(product) = a.checked_mul(b) {
                return Self::Integer(product);
            }
        }
        Self::Decimal(self.as_f64() * rhs.as_f64())
    }
}

impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        if let (Self::Integer(a), Self::Integer(b)) = (self, rhs) {
            if let (Some(quotient), Some(0)) = (a.checked_div(b), a.checked_rem(b)) {
                return Self::Integer(quotient);
            }
        }
        Self::Decimal(self.as_f64() / rhs.as_f64())
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Self::Integer(value) => match value.checked_neg() {
                Some(negated) => Self::Integer(negated),
                None => Self::Decimal(-(value as f64)),
            },
            Self::Decimal(value) => Self::Decimal(-value),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Decimal(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_integer_arithmetic_stays_exact() {
        let n = Number::from(365) * Number::pow10(9) + Number::from(16);
        assert_eq!(n, Number::Integer(365_000_000_016));
    }

    #[test]
    fn test_overflow_falls_back_to_decimal() {
        let n = Number::from(30) * Number::pow10(18);
        assert!(n.is_decimal());
        assert_abs_diff_eq!(n.as_f64(), 3e19, epsilon = 1e4);

        assert!(Number::pow10(24).is_decimal());
        assert!((-Number::Integer(i64::MIN)).is_decimal());
    }

    #[test]
    fn test_division() {
        assert_eq!(Number::from(10) / Number::from(5), Number::Integer(2));
        assert_eq!(Number::from(2) / Number::from(10), Number::Decimal(0.2));
        assert_eq!(Number::from(1) / Number::pow10(9), Number::Decimal(1e-9));
    }

    #[test]
    fn test_is_one() {
        assert!(Number::Integer(1).is_one());
        assert!(Number::Decimal(1.0).is_one());
        assert!(!Number::Decimal(1.5).is_one());
    }

    #[test]
    fn test_less_than() {
        assert!(Number::from(999).less_than(Number::pow10(3)));
        assert!(!Number::from(1000).less_than(Number::pow10(3)));
        assert!(Number::Decimal(0.5).less_than(Number::from(1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::from(23).to_string(), "23");
        assert_eq!(Number::Decimal(1.5).to_string(), "1.5");
    }
}
