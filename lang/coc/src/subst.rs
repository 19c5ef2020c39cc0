use std::rc::Rc;

use crate::expr::Expr;
use crate::shift::shift;

/// Replaces every free occurrence of `V(x, n)` in `target` with `replacement`.
///
/// Descending under a binder named `x'` shifts `replacement` by `+1` over
/// `x'` before recursing into the binder's body, so that any free
/// occurrence of `x'` already inside `replacement` keeps referring to the
/// same (now one-level-further-out) binder rather than being captured by
/// the binder we just descended under. This has to happen for *every*
/// binder named `x'`, not only when `x' == x`, since `replacement` may
/// itself mention `x'`.
pub fn subst(x: &str, n: u64, replacement: &Expr, target: &Expr) -> Expr {
    match target {
        Expr::Const(c) => Expr::Const(*c),
        Expr::Var(v) => {
            if v.name.as_ref() == x && v.index == n {
                replacement.clone()
            } else {
                Expr::Var(v.clone())
            }
        }
        Expr::Lam(name, domain, body) => {
            let domain2 = subst(x, n, replacement, domain);
            let n2 = if name.as_ref() == x { n + 1 } else { n };
            let replacement2 = shift(1, name, replacement);
            let body2 = subst(x, n2, &replacement2, body);
            Expr::Lam(name.clone(), Rc::new(domain2), Rc::new(body2))
        }
        Expr::Pi(name, domain, codomain) => {
            let domain2 = subst(x, n, replacement, domain);
            let n2 = if name.as_ref() == x { n + 1 } else { n };
            let replacement2 = shift(1, name, replacement);
            let codomain2 = subst(x, n2, &replacement2, codomain);
            Expr::Pi(name.clone(), Rc::new(domain2), Rc::new(codomain2))
        }
        Expr::App(f, a) => Expr::App(
            Rc::new(subst(x, n, replacement, f)),
            Rc::new(subst(x, n, replacement, a)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Const;

    #[test]
    fn substitutes_matching_index() {
        let target = Expr::var("x", 0);
        let replacement = Expr::Const(Const::Star);
        assert_eq!(subst("x", 0, &replacement, &target), replacement);
    }

    #[test]
    fn leaves_other_index_alone() {
        let target = Expr::var("x", 1);
        let replacement = Expr::Const(Const::Star);
        assert_eq!(subst("x", 0, &replacement, &target), target);
    }

    #[test]
    fn shifts_replacement_under_shadowing_binder() {
        // subst x@0 := y@0 into \(x:*) -> x@1
        // x@1 inside refers to the *outer* x, i.e. the one being replaced,
        // so after crossing the shadowing \(x:*) binder the replaced index
        // becomes 1, and the replacement y@0 is shifted to y@1.
        let replacement = Expr::var("y", 0);
        let target = Expr::lam("x", Expr::Const(Const::Star), Expr::var("x", 1));
        let expected = Expr::lam("x", Expr::Const(Const::Star), Expr::var("y", 1));
        assert_eq!(subst("x", 0, &replacement, &target), expected);
    }

    #[test]
    fn avoids_capture_of_free_names_in_replacement() {
        // subst x@0 := y@0 into \(y:*) -> x@0
        // descending under \(y:*) shifts the replacement's y@0 to y@1, so the
        // result correctly refers to the *outer* y, not the newly bound one.
        let replacement = Expr::var("y", 0);
        let target = Expr::lam("y", Expr::Const(Const::Star), Expr::var("x", 0));
        let expected = Expr::lam("y", Expr::Const(Const::Star), Expr::var("y", 1));
        assert_eq!(subst("x", 0, &replacement, &target), expected);
    }
}
