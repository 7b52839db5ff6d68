use ariadne::Fmt;
use deriv_attrs::ErrorKind;
use deriv_error::EXPR;

/// The expression uses the variable, but no value was given for it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "`x` has no value",
    labels = ["this variable"],
    help = format!("give it one with {}", "Ctxt::set_var".fg(EXPR)),
)]
pub struct MissingVariable;
