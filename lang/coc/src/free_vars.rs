use crate::expr::Expr;
use crate::var::Var;

/// Returns true iff some occurrence of the name `x` in `e` has an index at
/// least as large as the number of enclosing binders of `x` passed through
/// to reach it, i.e. iff `x` would still be free were `e` taken in
/// isolation at its own top level.
///
/// This is the hook a pretty-printer uses to decide whether a binder's name
/// is worth displaying at all (and, for `Pi`, whether to render `∀` or a
/// plain arrow): it does not ask whether one particular index is free, only
/// whether *any* occurrence of that name is.
pub fn used(x: &str, e: &Expr) -> bool {
    used_at(x, 0, e)
}

fn used_at(x: &str, cutoff: u64, e: &Expr) -> bool {
    match e {
        Expr::Const(_) => false,
        Expr::Var(v) => v.name.as_ref() == x && v.index >= cutoff,
        Expr::Lam(name, domain, body) => {
            used_at(x, cutoff, domain) || {
                let cutoff2 = if name.as_ref() == x { cutoff + 1 } else { cutoff };
                used_at(x, cutoff2, body)
            }
        }
        Expr::Pi(name, domain, codomain) => {
            used_at(x, cutoff, domain) || {
                let cutoff2 = if name.as_ref() == x { cutoff + 1 } else { cutoff };
                used_at(x, cutoff2, codomain)
            }
        }
        Expr::App(f, a) => used_at(x, cutoff, f) || used_at(x, cutoff, a),
    }
}

/// Returns true iff `v` has a free occurrence in `e`.
///
/// Traversal mirrors `subst`'s binder bookkeeping: descending under a
/// binder named `v.name` looks, inside the body, for one index further out.
pub fn free_in(v: &Var, e: &Expr) -> bool {
    free_in_at(v.name.as_ref(), v.index, e)
}

fn free_in_at(x: &str, n: u64, e: &Expr) -> bool {
    match e {
        Expr::Const(_) => false,
        Expr::Var(v) => v.name.as_ref() == x && v.index == n,
        Expr::Lam(name, domain, body) => {
            free_in_at(x, n, domain) || {
                let n2 = if name.as_ref() == x { n + 1 } else { n };
                free_in_at(x, n2, body)
            }
        }
        Expr::Pi(name, domain, codomain) => {
            free_in_at(x, n, domain) || {
                let n2 = if name.as_ref() == x { n + 1 } else { n };
                free_in_at(x, n2, codomain)
            }
        }
        Expr::App(f, a) => free_in_at(x, n, f) || free_in_at(x, n, a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Const;

    #[test]
    fn used_sees_free_occurrence() {
        let e = Expr::var("x", 0);
        assert!(used("x", &e));
        assert!(!used("y", &e));
    }

    #[test]
    fn used_is_blind_to_bound_occurrence() {
        let e = Expr::lam("x", Expr::Const(Const::Star), Expr::var("x", 0));
        assert!(!used("x", &e));
    }

    #[test]
    fn used_drives_pi_display_choice() {
        // \forall(x:*) -> x    -- x is used in the codomain
        let dependent = Expr::pi("x", Expr::Const(Const::Star), Expr::var("x", 0));
        assert!(used("x", if let Expr::Pi(_, _, cod) = &dependent { cod } else { unreachable!() }));

        // \forall(x:*) -> *    -- x is not used, this is a plain arrow
        let non_dependent = Expr::pi("x", Expr::Const(Const::Star), Expr::Const(Const::Star));
        assert!(!used(
            "x",
            if let Expr::Pi(_, _, cod) = &non_dependent { cod } else { unreachable!() }
        ));
    }

    #[test]
    fn free_in_respects_index() {
        let e = Expr::var("x", 1);
        assert!(free_in(&Var::new("x", 1), &e));
        assert!(!free_in(&Var::new("x", 0), &e));
    }

    #[test]
    fn free_in_tracks_binder_crossing() {
        // \(x:*) -> x@1 refers to the outer x, not the bound one.
        let e = Expr::lam("x", Expr::Const(Const::Star), Expr::var("x", 1));
        assert!(free_in(&Var::new("x", 0), &e));
        assert!(!free_in(&Var::new("x", 1), &e));
    }
}
