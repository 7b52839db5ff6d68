//! Errors that can occur while evaluating an expression.
//!
//! The spans of these errors point into the rendering of the evaluated expression, that is, into
//! `expr.to_string()`.

pub mod kind;

pub use deriv_error::Error;
