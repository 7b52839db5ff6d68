//! The expression tree that the differentiator consumes and produces.
//!
//! An [`Expr`] is an immutable node. Children are held behind [`Arc`]s ([`ExprRef`]), so a tree
//! built from existing subtrees **shares** them rather than copying them. The differentiator
//! relies on this: the product rule, for example, places the original factors of `f * g` into
//! `f' * g + f * g'` by cloning their [`Arc`]s.
//!
//! There is exactly one free variable, [`Expr::Var`], rendered as `x`. Nodes carry no
//! identity beyond their shape; two occurrences of [`Expr::Var`] are the same variable.
//!
//! ```
//! use deriv_compute::symbolic::expr::Expr;
//!
//! let x = Expr::var();
//! let square = Expr::mul(&x, &x);
//! let f = Expr::add(&square, &Expr::constant(3.0));
//!
//! assert_eq!(f.to_string(), "x * x + 3");
//! assert_eq!(f.node_count(), 5);
//! ```
//!
//! # Equality
//!
//! The [`PartialEq`] implementation is **structural**: two trees are equal if they have the same
//! shape and their constants compare equal with `==`. It says nothing about whether the two trees
//! share nodes; use [`Arc::ptr_eq`] for that. It is also not semantic equality, `x * 1` and `x`
//! are different trees.

mod iter;

use std::sync::Arc;

pub use iter::ExprIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A shared, immutable reference to an [`Expr`].
pub type ExprRef = Arc<Expr>;

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal, such as `3` or `0.5`.
    Const(f64),

    /// The variable, `x`.
    Var,

    /// `lhs + rhs`.
    Add(ExprRef, ExprRef),

    /// `lhs - rhs`.
    Sub(ExprRef, ExprRef),

    /// `lhs * rhs`.
    Mul(ExprRef, ExprRef),

    /// `lhs / rhs`.
    Div(ExprRef, ExprRef),

    /// `base ^ exponent`.
    Pow(ExprRef, ExprRef),

    /// The natural logarithm of its argument.
    ///
    /// Differentiating `c^x` produces this node. It cannot be differentiated itself.
    Ln(ExprRef),
}

impl Expr {
    /// Creates a constant.
    pub fn constant(value: f64) -> ExprRef {
        Arc::new(Expr::Const(value))
    }

    /// Creates the variable.
    pub fn var() -> ExprRef {
        Arc::new(Expr::Var)
    }

    /// Creates `lhs + rhs`.
    pub fn add(lhs: &ExprRef, rhs: &ExprRef) -> ExprRef {
        Arc::new(Expr::Add(Arc::clone(lhs), Arc::clone(rhs)))
    }

    /// Creates `lhs - rhs`.
    pub fn sub(lhs: &ExprRef, rhs: &ExprRef) -> ExprRef {
        Arc::new(Expr::Sub(Arc::clone(lhs), Arc::clone(rhs)))
    }

    /// Creates `lhs * rhs`.
    pub fn mul(lhs: &ExprRef, rhs: &ExprRef) -> ExprRef {
        Arc::new(Expr::Mul(Arc::clone(lhs), Arc::clone(rhs)))
    }

    /// Creates `lhs / rhs`.
    pub fn div(lhs: &ExprRef, rhs: &ExprRef) -> ExprRef {
        Arc::new(Expr::Div(Arc::clone(lhs), Arc::clone(rhs)))
    }

    /// Creates `base ^ exponent`.
    pub fn pow(base: &ExprRef, exponent: &ExprRef) -> ExprRef {
        Arc::new(Expr::Pow(Arc::clone(base), Arc::clone(exponent)))
    }

    /// Creates `ln(arg)`.
    pub fn ln(arg: &ExprRef) -> ExprRef {
        Arc::new(Expr::Ln(Arc::clone(arg)))
    }

    /// Returns the value of this node if it is a [`Expr::Const`].
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Expr::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this node is a [`Expr::Const`].
    pub fn is_const(&self) -> bool {
        matches!(self, Expr::Const(_))
    }

    /// Returns true if this node is the variable.
    pub fn is_var(&self) -> bool {
        matches!(self, Expr::Var)
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Const(_) | Expr::Var)
    }

    /// Returns the children of this node, from left to right.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &ExprRef> {
        let (first, second) = match self {
            Expr::Const(_) | Expr::Var => (None, None),
            Expr::Ln(arg) => (Some(arg), None),
            Expr::Add(lhs, rhs)
                | Expr::Sub(lhs, rhs)
                | Expr::Mul(lhs, rhs)
                | Expr::Div(lhs, rhs)
                | Expr::Pow(lhs, rhs) => (Some(lhs), Some(rhs)),
        };
        first.into_iter().chain(second)
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order.
    ///
    /// A subtree that is shared by several parents is yielded once per parent.
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree, counting a shared subtree once for every place it
    /// appears.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the depth of the tree. A leaf has depth 1.
    ///
    /// The differentiator recurses once per level, so callers that accept untrusted trees can use
    /// this to bound the recursion before differentiating.
    pub fn depth(&self) -> usize {
        1 + self.children().map(|child| child.depth()).max().unwrap_or(0)
    }

    /// Returns true if the variable appears anywhere in the tree.
    pub fn contains_var(&self) -> bool {
        self.post_order_iter().any(Expr::is_var)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&super::fmt::render(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn constructors_share_children() {
        let x = Expr::var();
        let two = Expr::constant(2.0);
        let product = Expr::mul(&two, &x);

        let Expr::Mul(lhs, rhs) = &*product else {
            panic!("expected a product, got {product:?}");
        };
        assert!(Arc::ptr_eq(lhs, &two));
        assert!(Arc::ptr_eq(rhs, &x));
    }

    #[test]
    fn structural_equality_ignores_sharing() {
        let x = Expr::var();
        let shared = Expr::mul(&x, &x);
        let separate = Expr::mul(&Expr::var(), &Expr::var());
        assert_eq!(shared, separate);
        assert_ne!(shared, Expr::mul(&x, &Expr::constant(1.0)));
    }

    #[test]
    fn leaf_queries() {
        assert_eq!(Expr::constant(4.5).as_const(), Some(4.5));
        assert_eq!(Expr::var().as_const(), None);
        assert!(Expr::var().is_var());
        assert!(Expr::constant(0.0).is_const());
        assert!(!Expr::ln(&Expr::var()).is_leaf());
    }

    #[test]
    fn depth_and_count() {
        let x = Expr::var();
        let square = Expr::mul(&x, &x);
        let f = Expr::div(&Expr::add(&square, &Expr::constant(3.0)), &Expr::ln(&x));

        assert_eq!(x.depth(), 1);
        assert_eq!(f.depth(), 4);
        assert_eq!(f.node_count(), 8);
        assert!(f.contains_var());
        assert!(!Expr::add(&Expr::constant(1.0), &Expr::constant(2.0)).contains_var());
    }

    #[test]
    fn children_in_order() {
        let (a, b) = (Expr::constant(1.0), Expr::var());
        let pow = Expr::pow(&a, &b);
        let children = pow.children().collect::<Vec<_>>();
        assert!(Arc::ptr_eq(children[0], &a));
        assert!(Arc::ptr_eq(children[1], &b));
        assert_eq!(Expr::ln(&a).children().count(), 1);
        assert_eq!(a.children().count(), 0);
    }
}
