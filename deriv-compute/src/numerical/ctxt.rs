use crate::primitive::{float_with_prec, PRECISION};
use rug::{float, Assign, Float};

/// A context to use when evaluating an expression, holding the value of the variable and the
/// precision to evaluate at.
#[derive(Debug, Clone, PartialEq)]
pub struct Ctxt {
    /// The value of `x`, if it has been set.
    var: Option<Float>,

    /// The number of bits of precision of every intermediate value.
    precision: u32,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            var: None,
            precision: PRECISION,
        }
    }
}

impl Ctxt {
    /// Creates a new context with no value for `x`, using the default precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new context where `x` has the given value.
    pub fn with_var<T>(value: T) -> Self
    where
        Float: Assign<T>,
    {
        let mut ctxt = Self::new();
        ctxt.set_var(value);
        ctxt
    }

    /// Sets the precision used for evaluation, in bits. The precision is clamped to the range
    /// supported by MPFR. The value of `x`, if already set, is rounded to the new precision.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.clamp(float::prec_min(), float::prec_max());
        if let Some(var) = &mut self.var {
            var.set_prec(self.precision);
        }
        self
    }

    /// Returns the precision used for evaluation, in bits.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Sets the value of `x`.
    pub fn set_var<T>(&mut self, value: T)
    where
        Float: Assign<T>,
    {
        self.var = Some(float_with_prec(self.precision, value));
    }

    /// Removes the value of `x`.
    pub fn clear_var(&mut self) {
        self.var = None;
    }

    /// Returns the value of `x`, if it has been set.
    pub fn var(&self) -> Option<&Float> {
        self.var.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_applies_to_var() {
        let ctxt = Ctxt::with_var(0.1).with_precision(24);
        assert_eq!(ctxt.precision(), 24);
        assert_eq!(ctxt.var().unwrap().prec(), 24);
        assert_eq!(ctxt.var().unwrap().to_f64(), (0.1f64 as f32) as f64);
    }

    #[test]
    fn precision_is_clamped() {
        assert_eq!(Ctxt::new().with_precision(0).precision(), float::prec_min());
    }

    #[test]
    fn clear() {
        let mut ctxt = Ctxt::with_var(2);
        assert!(ctxt.var().is_some());
        ctxt.clear_var();
        assert!(ctxt.var().is_none());
    }
}
