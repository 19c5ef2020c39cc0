use std::rc::Rc;

use crate::ctx::Context;
use crate::equality::eq;
use crate::error::{TypeError, TypeMessage};
use crate::expr::{Const, Expr};
use crate::reduce::{normalize, whnf};
use crate::shift::shift;
use crate::subst::subst;

/// The type of a sort, per the single axiom `* : □`. `□` itself has no type.
pub fn axiom(c: Const) -> Result<Const, TypeMessage> {
    match c {
        Const::Star => Ok(Const::Box),
        Const::Box => Err(TypeMessage::Untyped(Const::Box)),
    }
}

/// The sort of `Pi(x : A).B` given the sorts of `A` and `B`. The Calculus of
/// Constructions admits all four combinations.
pub fn rule(domain_sort: Const, codomain_sort: Const) -> Const {
    match (domain_sort, codomain_sort) {
        (Const::Star, Const::Star) => Const::Star,
        (Const::Star, Const::Box) => Const::Box,
        (Const::Box, Const::Star) => Const::Star,
        (Const::Box, Const::Box) => Const::Box,
    }
}

/// Type-checks `e` in the empty context.
pub fn type_of(e: &Expr) -> Result<Expr, TypeError> {
    type_with(&Context::empty(), e)
}

/// Synthesizes the type of `e` under `ctx`.
pub fn type_with(ctx: &Context, e: &Expr) -> Result<Expr, TypeError> {
    match e {
        Expr::Const(c) => {
            axiom(*c).map(Expr::Const).map_err(|message| TypeError::new(ctx, e, message))
        }
        Expr::Var(v) => {
            ctx.lookup(v).cloned().ok_or_else(|| TypeError::new(ctx, e, TypeMessage::UnboundVariable))
        }
        Expr::Lam(x, domain, body) => {
            let ctx2 = ctx.shift(x, 1).extend(x.clone(), (**domain).clone());
            let body_ty = type_with(&ctx2, body)?;
            check_domain(ctx, domain)?;
            check_codomain(&ctx2, &body_ty)?;
            Ok(Expr::Pi(x.clone(), domain.clone(), Rc::new(body_ty)))
        }
        Expr::Pi(x, domain, codomain) => {
            let domain_sort = check_domain(ctx, domain)?;
            let ctx2 = ctx.shift(x, 1).extend(x.clone(), (**domain).clone());
            let codomain_sort = check_codomain(&ctx2, codomain)?;
            Ok(Expr::Const(rule(domain_sort, codomain_sort)))
        }
        Expr::App(f, a) => {
            let f_ty = type_with(ctx, f)?;
            match whnf(&f_ty) {
                Expr::Pi(x, pi_domain, pi_codomain) => {
                    let a_ty = type_with(ctx, a)?;
                    if !eq(&a_ty, &pi_domain) {
                        return Err(TypeError::new(
                            ctx,
                            e,
                            TypeMessage::TypeMismatch {
                                expected: normalize(&pi_domain),
                                actual: normalize(&a_ty),
                            },
                        ));
                    }
                    let a_shifted = shift(1, &x, a);
                    let substituted = subst(&x, 0, &a_shifted, &pi_codomain);
                    Ok(shift(-1, &x, &substituted))
                }
                _ => Err(TypeError::new(ctx, e, TypeMessage::NotAFunction((**f).clone()))),
            }
        }
    }
}

/// A `Lam`/`Pi` binder's domain must itself be well-sorted: its type must
/// reduce to `*` or `□`.
fn check_domain(ctx: &Context, domain: &Expr) -> Result<Const, TypeError> {
    let domain_ty = type_with(ctx, domain)?;
    match whnf(&domain_ty) {
        Expr::Const(c) => Ok(c),
        _ => Err(TypeError::new(ctx, domain, TypeMessage::InvalidInputType(domain.clone()))),
    }
}

/// A `Lam`'s body, or a `Pi`'s codomain, must likewise be well-sorted.
fn check_codomain(ctx: &Context, codomain: &Expr) -> Result<Const, TypeError> {
    let codomain_ty = type_with(ctx, codomain)?;
    match whnf(&codomain_ty) {
        Expr::Const(c) => Ok(c),
        _ => Err(TypeError::new(ctx, codomain, TypeMessage::InvalidOutputType(codomain.clone()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_has_type_box() {
        assert_eq!(type_of(&Expr::Const(Const::Star)), Ok(Expr::Const(Const::Box)));
    }

    #[test]
    fn box_is_untyped() {
        let err = type_of(&Expr::Const(Const::Box)).unwrap_err();
        assert_eq!(err.message, TypeMessage::Untyped(Const::Box));
    }

    #[test]
    fn identity_function_on_star_has_pi_type() {
        // \(A:*) -> \(x:A) -> x  :  forall(A:*) -> A -> A
        let id =
            Expr::lam("A", Expr::Const(Const::Star), Expr::lam("x", Expr::var("A", 0), Expr::var("x", 0)));
        let ty = type_of(&id).unwrap();
        let expected =
            Expr::pi("A", Expr::Const(Const::Star), Expr::arrow(Expr::var("A", 0), Expr::var("A", 0)));
        assert!(eq(&ty, &expected));
    }

    #[test]
    fn unbound_variable_is_rejected() {
        let err = type_of(&Expr::var("x", 0)).unwrap_err();
        assert_eq!(err.message, TypeMessage::UnboundVariable);
    }

    #[test]
    fn applying_a_non_function_is_rejected() {
        let e = Expr::app(Expr::Const(Const::Star), Expr::Const(Const::Star));
        let err = type_of(&e).unwrap_err();
        assert_eq!(err.message, TypeMessage::NotAFunction(Expr::Const(Const::Star)));
    }

    #[test]
    fn applying_with_wrong_argument_type_is_rejected() {
        // (\(x:*) -> x) □   -- the lambda expects a `*`-sorted argument, not `□`
        let f = Expr::lam("x", Expr::Const(Const::Star), Expr::var("x", 0));
        let e = Expr::app(f, Expr::Const(Const::Box));
        let err = type_of(&e).unwrap_err();
        match err.message {
            TypeMessage::TypeMismatch { expected, actual } => {
                assert_eq!(expected, Expr::Const(Const::Star));
                assert_eq!(actual, Expr::Const(Const::Box));
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn dependent_application_substitutes_into_result_type() {
        // id applied to * and to a value: (\(A:*) -> \(x:A) -> x) * *  :  *
        let id = Expr::lam(
            "A",
            Expr::Const(Const::Star),
            Expr::lam("x", Expr::var("A", 0), Expr::var("x", 0)),
        );
        let applied = Expr::app(Expr::app(id, Expr::Const(Const::Star)), Expr::Const(Const::Star));
        let ty = type_of(&applied).unwrap();
        assert!(eq(&ty, &Expr::Const(Const::Star)));
    }

    #[test]
    fn shadowed_binder_names_type_check_independently() {
        // \(x:*) -> \(x:x) -> x   :  forall(x:*) -> x -> x
        let e = Expr::lam(
            "x",
            Expr::Const(Const::Star),
            Expr::lam("x", Expr::var("x", 0), Expr::var("x", 0)),
        );
        let ty = type_of(&e).unwrap();
        let expected =
            Expr::pi("x", Expr::Const(Const::Star), Expr::arrow(Expr::var("x", 0), Expr::var("x", 0)));
        assert!(eq(&ty, &expected));
    }

    #[test]
    fn pi_sort_of_star_to_star_is_box() {
        // (* -> *) : □
        let e = Expr::arrow(Expr::Const(Const::Star), Expr::Const(Const::Star));
        assert_eq!(type_of(&e), Ok(Expr::Const(Const::Box)));
    }

    #[test]
    fn type_mismatch_reports_normal_forms_not_unreduced_domains() {
        // f : (\(b:*) -> b) * -> *, i.e. a Pi whose domain is an unreduced
        // redex equal to `*` in normal form. Applying f to `□` should report
        // the mismatch against `*`, not against the unreduced `(\(b:*) -> b) *`.
        let unreduced_domain =
            Expr::app(Expr::lam("b", Expr::Const(Const::Star), Expr::var("b", 0)), Expr::Const(Const::Star));
        let f = Expr::lam("x", unreduced_domain, Expr::Const(Const::Star));
        let e = Expr::app(f, Expr::Const(Const::Box));
        let err = type_of(&e).unwrap_err();
        match err.message {
            TypeMessage::TypeMismatch { expected, actual } => {
                assert_eq!(expected, Expr::Const(Const::Star));
                assert_eq!(actual, Expr::Const(Const::Box));
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn lam_reports_the_bodys_error_before_the_domains() {
        // \(x:□) -> y   -- both the domain (untyped box) and the body (an
        // unbound variable) are invalid; the body is checked first, so the
        // error reported is UnboundVariable, not Untyped(Box).
        let e = Expr::lam("x", Expr::Const(Const::Box), Expr::var("y", 0));
        let err = type_of(&e).unwrap_err();
        assert_eq!(err.message, TypeMessage::UnboundVariable);
    }
}
