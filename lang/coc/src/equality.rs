use std::rc::Rc;

use crate::expr::Expr;
use crate::reduce::normalize;
use crate::var::Var;

/// Alpha-equivalence up to full reduction: normalizes both sides, then
/// compares them structurally while tracking the correspondence between
/// bound names on a parallel stack, so that `λ(x:*) → x` and `λ(y:*) → y`
/// compare equal even though their binder names differ.
pub fn eq(l: &Expr, r: &Expr) -> bool {
    alpha_eq(&normalize(l), &normalize(r))
}

fn alpha_eq(l: &Expr, r: &Expr) -> bool {
    let mut stack: Vec<(Rc<str>, Rc<str>)> = Vec::new();
    go(&mut stack, l, r)
}

fn go(stack: &mut Vec<(Rc<str>, Rc<str>)>, l: &Expr, r: &Expr) -> bool {
    match (l, r) {
        (Expr::Const(a), Expr::Const(b)) => a == b,
        (Expr::Var(vl), Expr::Var(vr)) => match_vars(stack, vl, vr),
        (Expr::Lam(xl, dl, bl), Expr::Lam(xr, dr, br))
        | (Expr::Pi(xl, dl, bl), Expr::Pi(xr, dr, br)) => {
            if !go(stack, dl, dr) {
                return false;
            }
            stack.push((xl.clone(), xr.clone()));
            let result = go(stack, bl, br);
            stack.pop();
            result
        }
        (Expr::App(fl, al), Expr::App(fr, ar)) => go(stack, fl, fr) && go(stack, al, ar),
        _ => false,
    }
}

/// Walks the binder stack top-down (innermost first), decrementing each
/// side's remaining index independently whenever that side's name matches
/// the corresponding half of the stack entry. When both counters reach
/// zero at the same entry, the two variables refer to the same binder iff
/// that entry's two names are the ones being compared. If the stack is
/// exhausted without a match, both variables are free, and are equal iff
/// they share a name and the indices that survived the walk still agree.
fn match_vars(stack: &[(Rc<str>, Rc<str>)], vl: &Var, vr: &Var) -> bool {
    let mut nl = vl.index;
    let mut nr = vr.index;
    for (xl2, xr2) in stack.iter().rev() {
        if nl == 0 && nr == 0 {
            return xl2.as_ref() == vl.name.as_ref() && xr2.as_ref() == vr.name.as_ref();
        }
        let l_hit = xl2.as_ref() == vl.name.as_ref();
        let r_hit = xr2.as_ref() == vr.name.as_ref();
        match (nl.checked_sub(l_hit as u64), nr.checked_sub(r_hit as u64)) {
            (Some(a), Some(b)) => {
                nl = a;
                nr = b;
            }
            _ if !l_hit && !r_hit => {}
            _ => return false,
        }
    }
    nl == nr && vl.name == vr.name
}
