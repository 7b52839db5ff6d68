//! Numerical evaluation of expression trees.
//!
//! Derivatives are trees, not numbers; this module folds a tree into a number once the variable
//! has been given a value in a [`ctxt::Ctxt`]. Arithmetic is done with [`rug::Float`] at the
//! context's precision and follows IEEE 754 semantics: dividing by zero produces an infinity and
//! the logarithm of a negative number produces NaN, neither of which is an error.
//!
//! ```
//! use deriv_compute::numerical::{ctxt::Ctxt, eval::Eval};
//! use deriv_compute::symbolic::expr::Expr;
//!
//! let x = Expr::var();
//! let f = Expr::add(&Expr::mul(&x, &x), &Expr::constant(1.0));
//!
//! let mut ctxt = Ctxt::new();
//! ctxt.set_var(3);
//! assert_eq!(f.eval(&ctxt).unwrap().to_f64(), 10.0);
//! ```
//!
//! # Features
//!
//! This module is only available with the `numerical` feature, which is enabled by default.

#![cfg(feature = "numerical")]

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod value;
