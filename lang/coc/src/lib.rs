//! A minimalist, strongly-normalizing core based on the Calculus of
//! Constructions: a term model, capture-avoiding `shift`/`subst`, a reducer
//! computing weak-head and full normal forms, alpha-equivalence-aware
//! equality, and a bidirectional type checker.
//!
//! Parsing, pretty-printing, and binary interchange live outside this
//! crate; it exposes `Expr`'s structure directly so a caller can build
//! those on top.

mod ctx;
mod display;
mod equality;
mod error;
mod expr;
mod free_vars;
mod reduce;
mod shift;
mod subst;
mod typecheck;
mod var;

pub use ctx::Context;
pub use equality::eq;
pub use error::{TypeError, TypeMessage};
pub use expr::{Const, Expr};
pub use free_vars::{free_in, used};
pub use reduce::{normalize, whnf};
pub use shift::shift;
pub use subst::subst;
pub use typecheck::{axiom, rule, type_of, type_with};
pub use var::Var;
