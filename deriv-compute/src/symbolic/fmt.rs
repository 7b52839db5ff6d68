//! Infix rendering of expression trees.
//!
//! Parentheses are inserted only where the tree's shape differs from what the usual precedence
//! and associativity rules would read back: `+ - * /` are left-associative, `^` is
//! right-associative. Reading a rendering back therefore yields the same tree.
//!
//! The renderer can also record where a particular node ended up in the output, which is how
//! errors point at the offending part of an expression.

use std::ops::Range;
use super::expr::Expr;

/// How tightly an expression binds to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Term,
    Factor,
    Exp,
    Atom,
}

/// Which operand of its parent an expression is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn precedence(expr: &Expr) -> Precedence {
    match expr {
        Expr::Add(..) | Expr::Sub(..) => Precedence::Term,
        Expr::Mul(..) | Expr::Div(..) => Precedence::Factor,
        // a leading minus sign reads like a unary operator
        Expr::Const(value) if value.is_sign_negative() => Precedence::Factor,
        Expr::Pow(..) => Precedence::Exp,
        Expr::Const(_) | Expr::Var | Expr::Ln(_) => Precedence::Atom,
    }
}

/// Returns true if `child`, appearing on `side` of an operator with precedence `parent`, must be
/// wrapped in parentheses.
fn needs_parens(child: &Expr, parent: Precedence, side: Side) -> bool {
    let child = precedence(child);
    if child != parent {
        return child < parent;
    }

    match parent {
        Precedence::Exp => side == Side::Left,
        _ => side == Side::Right,
    }
}

struct Renderer<'a> {
    out: String,
    target: Option<&'a Expr>,
    span: Option<Range<usize>>,
}

impl<'a> Renderer<'a> {
    fn new(target: Option<&'a Expr>) -> Self {
        Self { out: String::new(), target, span: None }
    }

    fn binary(&mut self, lhs: &Expr, op: &str, rhs: &Expr, prec: Precedence) {
        self.operand(lhs, prec, Side::Left);
        self.out.push_str(op);
        self.operand(rhs, prec, Side::Right);
    }

    fn operand(&mut self, expr: &Expr, parent: Precedence, side: Side) {
        if needs_parens(expr, parent, side) {
            self.out.push('(');
            self.write(expr);
            self.out.push(')');
        } else {
            self.write(expr);
        }
    }

    fn write(&mut self, expr: &Expr) {
        let start = self.out.len();
        match expr {
            Expr::Const(value) => self.out.push_str(&value.to_string()),
            Expr::Var => self.out.push('x'),
            Expr::Add(lhs, rhs) => self.binary(lhs, " + ", rhs, Precedence::Term),
            Expr::Sub(lhs, rhs) => self.binary(lhs, " - ", rhs, Precedence::Term),
            Expr::Mul(lhs, rhs) => self.binary(lhs, " * ", rhs, Precedence::Factor),
            Expr::Div(lhs, rhs) => self.binary(lhs, " / ", rhs, Precedence::Factor),
            Expr::Pow(base, exponent) => self.binary(base, "^", exponent, Precedence::Exp),
            Expr::Ln(arg) => {
                self.out.push_str("ln(");
                self.write(arg);
                self.out.push(')');
            },
        }

        // first occurrence wins if the target is shared
        if self.span.is_none() && self.target.is_some_and(|target| std::ptr::eq(target, expr)) {
            self.span = Some(start..self.out.len());
        }
    }
}

/// Renders the expression in infix notation.
pub fn render(expr: &Expr) -> String {
    let mut renderer = Renderer::new(None);
    renderer.write(expr);
    renderer.out
}

/// Renders `expr` in infix notation, and returns the byte range that the node `target` occupies in
/// the output.
///
/// `target` is matched by address, so it must be a node inside `expr` (for example, a clone of one
/// of its [`ExprRef`](super::expr::ExprRef)s) rather than a structurally equal copy. The range is
/// [`None`] if `target` does not appear in `expr`.
pub fn render_locating(expr: &Expr, target: &Expr) -> (String, Option<Range<usize>>) {
    let mut renderer = Renderer::new(Some(target));
    renderer.write(expr);
    (renderer.out, renderer.span)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn minimal_parens() {
        let x = Expr::var();
        let one = Expr::constant(1.0);
        let sum = Expr::add(&x, &one);

        assert_eq!(render(&Expr::mul(&sum, &x)), "(x + 1) * x");
        assert_eq!(render(&Expr::add(&Expr::mul(&x, &x), &one)), "x * x + 1");
        assert_eq!(render(&Expr::sub(&x, &sum)), "x - (x + 1)");
        assert_eq!(render(&Expr::sub(&sum, &x)), "x + 1 - x");
        assert_eq!(render(&Expr::div(&x, &Expr::mul(&x, &x))), "x / (x * x)");
    }

    #[test]
    fn power_is_right_associative() {
        let x = Expr::var();
        let two = Expr::constant(2.0);
        assert_eq!(render(&Expr::pow(&two, &Expr::pow(&x, &two))), "2^x^2");
        assert_eq!(render(&Expr::pow(&Expr::pow(&two, &x), &two)), "(2^x)^2");
        assert_eq!(render(&Expr::pow(&Expr::mul(&two, &x), &x)), "(2 * x)^x");
    }

    #[test]
    fn negative_and_fractional_constants() {
        let x = Expr::var();
        let neg = Expr::constant(-1.0);
        assert_eq!(render(&Expr::pow(&neg, &x)), "(-1)^x");
        assert_eq!(render(&Expr::mul(&x, &neg)), "x * (-1)");
        assert_eq!(render(&Expr::mul(&neg, &x)), "-1 * x");
        assert_eq!(render(&Expr::add(&x, &neg)), "x + -1");
        assert_eq!(render(&Expr::pow(&x, &Expr::constant(0.5))), "x^0.5");
    }

    #[test]
    fn logarithm() {
        let five = Expr::constant(5.0);
        let f = Expr::mul(&Expr::pow(&five, &Expr::var()), &Expr::ln(&five));
        assert_eq!(render(&f), "5^x * ln(5)");
    }

    #[test]
    fn locate_subtree() {
        let x = Expr::var();
        let base = Expr::add(&x, &Expr::constant(1.0));
        let pow = Expr::pow(&base, &x);
        let f = Expr::mul(&Expr::constant(3.0), &pow);

        let (text, span) = render_locating(&f, &pow);
        assert_eq!(text, "3 * (x + 1)^x");
        let span = span.unwrap();
        assert_eq!(&text[span], "(x + 1)^x");

        let (text, span) = render_locating(&f, &base);
        assert_eq!(&text[span.unwrap()], "x + 1");
    }

    #[test]
    fn locate_matches_by_address() {
        let f = Expr::add(&Expr::var(), &Expr::constant(1.0));
        let lookalike = Expr::constant(1.0);
        assert_eq!(render_locating(&f, &lookalike).1, None);
    }
}
