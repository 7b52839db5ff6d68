use deriv_attrs::ErrorKind;
use deriv_error::Error;
use crate::symbolic::{expr::{Expr, ExprRef}, fmt::render_locating};

/// No differentiation rule matches the highlighted subexpression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate `{}`", self.shape),
    labels = ["no differentiation rule matches this subexpression"],
    help = self.help,
)]
pub struct UnsupportedShape {
    /// The rendered subexpression.
    pub shape: String,

    /// What the supported forms of this kind of node are.
    pub help: &'static str,
}

/// Errors that can occur while computing a derivative.
#[derive(Debug, Clone)]
pub enum SymbolicDerivativeError {
    /// The given node has no differentiation rule. The node is the one inside the input tree, so
    /// it can be located with [`std::sync::Arc::ptr_eq`] or [`SymbolicDerivativeError::locate`].
    UnsupportedShape(ExprRef),
}

impl SymbolicDerivativeError {
    /// Returns the node that could not be differentiated.
    pub fn node(&self) -> &ExprRef {
        match self {
            Self::UnsupportedShape(node) => node,
        }
    }

    /// Renders `root`, the expression that was being differentiated, and converts this error into
    /// a reportable [`Error`] highlighting the offending node within that rendering.
    ///
    /// Returns the rendering alongside the error, since reports need the text the spans refer to.
    /// If the offending node is not part of `root`, the error has no spans.
    pub fn locate(&self, root: &Expr) -> (String, Error) {
        let Self::UnsupportedShape(node) = self;
        let (rendered, span) = render_locating(root, node);
        let kind = UnsupportedShape {
            shape: node.to_string(),
            help: help_for(node),
        };
        (rendered, Error::new(span.into_iter().collect(), kind))
    }
}

/// Describes which forms of the given node can be differentiated.
fn help_for(node: &Expr) -> &'static str {
    match node {
        Expr::Pow(..) => "only powers of the form `c^x`, `x^c`, or `c^f(x)` (where `c` is a constant) can be differentiated",
        Expr::Ln(..) => "logarithms are produced by differentiation, but cannot be differentiated themselves",
        _ => "this kind of expression cannot be differentiated",
    }
}

impl std::fmt::Display for SymbolicDerivativeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedShape(node) => write!(f, "cannot differentiate `{}`", node),
        }
    }
}

impl std::error::Error for SymbolicDerivativeError {}
