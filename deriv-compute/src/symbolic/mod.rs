//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are trees of [`Expr`] nodes over a single variable, `x`, built from constants,
//! `+`, `-`, `*`, `/`, and `^`. Derivatives can additionally contain `ln`. Nodes are immutable
//! and reference-counted, so trees can share subtrees freely; see the [`expr`] module.
//!
//! # Differentiation
//!
//! [`derivative()`] maps a tree to the tree of its derivative with respect to `x`, by applying the
//! sum, product, quotient, and power rules node by node. The result is intentionally left
//! unsimplified.
//!
//! ```
//! use deriv_compute::symbolic::{derivative, Expr};
//!
//! let x = Expr::var();
//! let f = Expr::pow(&x, &Expr::constant(3.0));
//! assert_eq!(derivative(&f).unwrap().to_string(), "3 * x^2");
//! ```
//!
//! Not every tree can be differentiated. Powers whose base and exponent both depend on `x` have no
//! rule, and produce a [`SymbolicDerivativeError`] that can be turned into a report pointing at
//! the offending subexpression:
//!
//! ```
//! use deriv_compute::symbolic::{derivative, Expr};
//!
//! let x = Expr::var();
//! let f = Expr::add(&Expr::constant(1.0), &Expr::pow(&x, &x));
//!
//! let err = derivative(&f).unwrap_err();
//! let (source, report) = err.locate(&f);
//! assert_eq!(source, "1 + x^x");
//! assert_eq!(report.spans, vec![4..7]);
//! ```

pub mod derivative;
pub mod expr;
pub mod fmt;

pub use derivative::{derivative, SymbolicDerivativeError};
pub use expr::{Expr, ExprRef};
