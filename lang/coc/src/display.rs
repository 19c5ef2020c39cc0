use std::fmt;

use crate::expr::{Const, Expr};
use crate::free_vars::used;

/// A convenience rendering of terms for diagnostics and tracing output.
///
/// This is deliberately not a general pretty-printer: no line-width
/// awareness, no layout choices, just enough parenthesization to round-trip
/// unambiguously back to the same term.
impl fmt::Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Const::Star => write!(f, "*"),
            Const::Box => write!(f, "\u{25a1}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(c) => write!(f, "{c}"),
            Expr::Var(v) if v.index == 0 => write!(f, "{}", v.name),
            Expr::Var(v) => write!(f, "{}@{}", v.name, v.index),
            Expr::Lam(x, domain, body) => write!(f, "\u{3bb}({x} : {domain}) \u{2192} {body}"),
            Expr::Pi(x, domain, codomain) if used(x, codomain) => {
                write!(f, "\u{2200}({x} : {domain}) \u{2192} {codomain}")
            }
            Expr::Pi(_, domain, codomain) => {
                write!(f, "{} \u{2192} {codomain}", parenthesize_operand(domain))
            }
            Expr::App(function, argument) => {
                write!(f, "{} {}", parenthesize_function(function), parenthesize_argument(argument))
            }
        }
    }
}

fn is_binder(e: &Expr) -> bool {
    matches!(e, Expr::Lam(..) | Expr::Pi(..))
}

/// The domain of a non-dependent `Pi` (i.e. its arrow's left operand) needs
/// parentheses whenever it is itself a binder, so `(* → *) → *` is not
/// misread as `* → * → *`.
fn parenthesize_operand(e: &Expr) -> String {
    if is_binder(e) { format!("({e})") } else { format!("{e}") }
}

/// An application's argument needs parentheses whenever it is itself an
/// application or a binder, since application is left-associative and
/// binds tighter than either.
fn parenthesize_argument(e: &Expr) -> String {
    if is_binder(e) || matches!(e, Expr::App(..)) { format!("({e})") } else { format!("{e}") }
}

/// An application's function position needs parentheses only when it is a
/// binder; a nested application prints fine unparenthesized since `f a b`
/// already reads left-associatively.
fn parenthesize_function(e: &Expr) -> String {
    if is_binder(e) { format!("({e})") } else { format!("{e}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_identity() {
        let e = Expr::lam("x", Expr::Const(Const::Star), Expr::var("x", 0));
        assert_eq!(e.to_string(), "\u{3bb}(x : *) \u{2192} x");
    }

    #[test]
    fn renders_shadowed_variable_with_index() {
        let e = Expr::var("x", 1);
        assert_eq!(e.to_string(), "x@1");
    }

    #[test]
    fn renders_non_dependent_pi_as_arrow() {
        let e = Expr::arrow(Expr::Const(Const::Star), Expr::Const(Const::Star));
        assert_eq!(e.to_string(), "* \u{2192} *");
    }

    #[test]
    fn renders_dependent_pi_with_forall() {
        let e = Expr::pi("x", Expr::Const(Const::Star), Expr::var("x", 0));
        assert_eq!(e.to_string(), "\u{2200}(x : *) \u{2192} x");
    }

    #[test]
    fn parenthesizes_applied_lambda() {
        let id = Expr::lam("x", Expr::Const(Const::Star), Expr::var("x", 0));
        let e = Expr::app(id, Expr::Const(Const::Star));
        assert_eq!(e.to_string(), "(\u{3bb}(x : *) \u{2192} x) *");
    }
}
