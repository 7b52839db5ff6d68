use crate::primitive::float_with_prec;
use crate::symbolic::{expr::Expr, fmt::render_locating};
use log::debug;
use rug::{ops::Pow, Float};
use super::{ctxt::Ctxt, error::{kind::MissingVariable, Error}, value::Value};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error>;

    /// Evaluate the expression to produce a value, using the default context, where `x` has no
    /// value.
    fn eval_default(&self) -> Result<Value, Error> {
        self.eval(&Ctxt::default())
    }

    /// Evaluate the expression with `x` set to the given value, at the default precision.
    fn eval_at(&self, x: f64) -> Result<Value, Error> {
        self.eval(&Ctxt::with_var(x))
    }
}

/// Folds the tree into a single number. Returns [`None`] if the tree uses `x` and `x` has no value.
fn fold(expr: &Expr, x: Option<&Float>, prec: u32) -> Option<Float> {
    let value = match expr {
        Expr::Const(value) => float_with_prec(prec, *value),
        Expr::Var => float_with_prec(prec, x?),
        Expr::Add(lhs, rhs) => fold(lhs, x, prec)? + fold(rhs, x, prec)?,
        Expr::Sub(lhs, rhs) => fold(lhs, x, prec)? - fold(rhs, x, prec)?,
        Expr::Mul(lhs, rhs) => fold(lhs, x, prec)? * fold(rhs, x, prec)?,
        Expr::Div(lhs, rhs) => fold(lhs, x, prec)? / fold(rhs, x, prec)?,
        Expr::Pow(base, exponent) => fold(base, x, prec)?.pow(fold(exponent, x, prec)?),
        Expr::Ln(arg) => fold(arg, x, prec)?.ln(),
    };
    Some(value)
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error> {
        fold(self, ctxt.var(), ctxt.precision())
            .map(Value::new)
            .ok_or_else(|| missing_variable(self))
    }
}

/// Builds the error for evaluating `expr` without a value for `x`, pointing at the first use of
/// `x`.
fn missing_variable(expr: &Expr) -> Error {
    debug!("evaluating `{}` without a value for `x`", expr);
    let spans = expr.post_order_iter()
        .find(|node| node.is_var())
        .and_then(|var| render_locating(expr, var).1);
    Error::new(spans.into_iter().collect(), MissingVariable)
}
