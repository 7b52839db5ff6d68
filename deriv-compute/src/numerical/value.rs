use crate::primitive::float;
use rug::Float;
use std::fmt::{Display, Formatter};

/// The result of evaluating an expression: a real number, possibly infinite or NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Value(Float);

impl Value {
    /// Creates a value from the given [`Float`].
    pub fn new(value: Float) -> Self {
        Self(value)
    }

    /// Returns the underlying [`Float`].
    pub fn as_float(&self) -> &Float {
        &self.0
    }

    /// Consumes the value, returning the underlying [`Float`].
    pub fn into_float(self) -> Float {
        self.0
    }

    /// Rounds the value to the nearest [`f64`].
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    /// Returns true if the value is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Returns true if both values are within a small relative distance of each other, which
    /// absorbs rounding error introduced during evaluation.
    pub fn approx_eq(&self, other: &Value) -> bool {
        if self.0 == other.0 {
            return true;
        }
        if !self.is_finite() || !other.is_finite() {
            return false;
        }

        let diff = float(&self.0 - &other.0).abs();
        let scale = float(self.0.abs_ref()).max(&float(other.0.abs_ref()));
        diff <= scale * float(1e-12) || diff <= 1e-300
    }
}

impl From<Float> for Value {
    fn from(value: Float) -> Self {
        Self(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self(float(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self(float(value))
    }
}

/// Values are written as their nearest [`f64`], honoring the formatter's precision if one is
/// given.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.to_f64()),
            None => write!(f, "{}", self.to_f64()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx() {
        let third = Value::from(float(1) / float(3));
        assert!(third.approx_eq(&Value::from(1.0 / 3.0)));
        assert!(!third.approx_eq(&Value::from(0.3333)));
        assert!(Value::from(f64::INFINITY).approx_eq(&Value::from(f64::INFINITY)));
        assert!(!Value::from(f64::NAN).approx_eq(&Value::from(f64::NAN)));
    }

    #[test]
    fn display() {
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(format!("{:.3}", Value::from(std::f64::consts::PI)), "3.142");
    }
}
