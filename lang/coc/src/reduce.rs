use std::rc::Rc;

use tracer::trace;

use crate::expr::Expr;
use crate::free_vars::free_in;
use crate::shift::shift;
use crate::subst::subst;
use crate::var::Var;

/// Reduces `e` to weak-head normal form: beta-reduces head redexes until the
/// head is no longer an application of a lambda, without descending into
/// binders or into non-head positions.
///
/// Termination is only guaranteed for well-typed `e`; the shift/subst/
/// shift-back beta step assumes its usual precondition (that `a`'s free
/// variables are correctly indexed relative to `body`'s binder) and is not
/// dynamically checked.
#[trace("whnf {} ~> {return:P}", e, data::id)]
pub fn whnf(e: &Expr) -> Expr {
    match e {
        Expr::App(f, a) => {
            let f_whnf = whnf(f);
            if let Expr::Lam(x, _, body) = &f_whnf {
                let a_shifted = shift(1, x, a);
                let substituted = subst(x, 0, &a_shifted, body);
                whnf(&shift(-1, x, &substituted))
            } else {
                Expr::App(Rc::new(f_whnf), a.clone())
            }
        }
        other => other.clone(),
    }
}

/// Reduces `e` to full normal form: beta-reduces every redex and, once a
/// lambda's body has itself been normalized, eta-reduces
/// `λ(x : A) → f x` to `f` whenever `x` does not occur free in `f`.
#[trace("normalize {} ~> {return:P}", e, data::id)]
pub fn normalize(e: &Expr) -> Expr {
    match e {
        Expr::Const(c) => Expr::Const(*c),
        Expr::Var(v) => Expr::Var(v.clone()),
        Expr::Lam(x, domain, body) => {
            let domain2 = normalize(domain);
            let body2 = normalize(body);
            if let Expr::App(f, arg) = &body2 {
                if let Expr::Var(v) = arg.as_ref() {
                    if v.name.as_ref() == x.as_ref()
                        && v.index == 0
                        && !free_in(&Var::new(x.clone(), 0), f)
                    {
                        return shift(-1, x, f);
                    }
                }
            }
            Expr::Lam(x.clone(), Rc::new(domain2), Rc::new(body2))
        }
        Expr::Pi(x, domain, codomain) => {
            Expr::Pi(x.clone(), Rc::new(normalize(domain)), Rc::new(normalize(codomain)))
        }
        Expr::App(f, a) => {
            let f_normal = normalize(f);
            if let Expr::Lam(x, _, body) = &f_normal {
                let a_shifted = shift(1, x, a);
                let substituted = subst(x, 0, &a_shifted, body);
                normalize(&shift(-1, x, &substituted))
            } else {
                Expr::App(Rc::new(f_normal), Rc::new(normalize(a)))
            }
        }
    }
}
