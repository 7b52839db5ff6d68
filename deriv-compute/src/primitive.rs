//! Functions to construct [`Float`]s used during evaluation.

use rug::{Assign, Float};

/// The number of bits of precision to use when computing values, unless a [`Ctxt`] specifies
/// otherwise.
///
/// [`Ctxt`]: crate::numerical::ctxt::Ctxt
pub const PRECISION: u32 = 1 << 9;

/// Creates a [`Float`] with the given value and the default precision.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Creates a [`Float`] with the given value and precision.
pub fn float_with_prec<T>(prec: u32, n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(prec, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_precision() {
        assert_eq!(float(1.5).prec(), PRECISION);
        assert_eq!(float(1.5), 1.5);
        assert_eq!(float_with_prec(64, 2).prec(), 64);
    }
}
