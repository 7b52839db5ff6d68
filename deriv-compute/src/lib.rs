//! Symbolic differentiation of expressions in a single variable.
//!
//! - [`symbolic`] holds the expression tree and the differentiator.
//! - [`numerical`] evaluates trees (such as derivatives) at a point. It is enabled by the default
//!   `numerical` feature.
//!
//! ```
//! use deriv_compute::numerical::eval::Eval;
//! use deriv_compute::symbolic::{derivative, Expr};
//!
//! // d/dx 2^x at x = 0 is ln(2)
//! let f = Expr::pow(&Expr::constant(2.0), &Expr::var());
//! let value = derivative(&f).unwrap().eval_at(0.0).unwrap();
//! assert!((value.to_f64() - std::f64::consts::LN_2).abs() < 1e-15);
//! ```
//!
//! # Features
//!
//! - `numerical` (default): numerical evaluation with [`rug`].
//! - `serde`: derives `Serialize` and `Deserialize` for [`symbolic::Expr`].

pub mod numerical;
#[cfg(feature = "numerical")]
pub mod primitive;
pub mod symbolic;
