use std::rc::Rc;

use crate::expr::Expr;
use crate::var::Var;

/// Adds `d` to the index of every free occurrence of `x` in `e`.
///
/// Used to keep De Bruijn-style indices correct when a sub-expression
/// crosses a binder boundary: `d = 1` on the way into a new binder of
/// `x`, `d = -1` on the way back out after a substitution has consumed
/// that binder.
///
/// `shift(0, x, e)` is the identity on `e` for any `x` (structurally).
pub fn shift(d: i64, x: &str, e: &Expr) -> Expr {
    shift_at(d, x, 0, e)
}

fn shift_at(d: i64, x: &str, cutoff: u64, e: &Expr) -> Expr {
    match e {
        Expr::Const(c) => Expr::Const(*c),
        Expr::Var(v) => {
            if v.name.as_ref() == x && v.index >= cutoff {
                Expr::Var(Var::new(v.name.clone(), shift_index(v.index, d)))
            } else {
                Expr::Var(v.clone())
            }
        }
        Expr::Lam(name, domain, body) => {
            let domain2 = shift_at(d, x, cutoff, domain);
            let cutoff2 = if name.as_ref() == x { cutoff + 1 } else { cutoff };
            let body2 = shift_at(d, x, cutoff2, body);
            Expr::Lam(name.clone(), Rc::new(domain2), Rc::new(body2))
        }
        Expr::Pi(name, domain, codomain) => {
            let domain2 = shift_at(d, x, cutoff, domain);
            let cutoff2 = if name.as_ref() == x { cutoff + 1 } else { cutoff };
            let codomain2 = shift_at(d, x, cutoff2, codomain);
            Expr::Pi(name.clone(), Rc::new(domain2), Rc::new(codomain2))
        }
        Expr::App(f, a) => {
            Expr::App(Rc::new(shift_at(d, x, cutoff, f)), Rc::new(shift_at(d, x, cutoff, a)))
        }
    }
}

fn shift_index(n: u64, d: i64) -> u64 {
    n.checked_add_signed(d).expect("shift produced a negative de Bruijn index")
}
