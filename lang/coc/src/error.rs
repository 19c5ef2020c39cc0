use thiserror::Error;

use crate::ctx::Context;
use crate::expr::{Const, Expr};

/// The specific reason a term failed to type-check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeMessage {
    #[error("unbound variable")]
    UnboundVariable,
    #[error("invalid input type `{0}`: not a type or kind")]
    InvalidInputType(Expr),
    #[error("invalid output type `{0}`: not a type or kind")]
    InvalidOutputType(Expr),
    #[error("not a function: `{0}`")]
    NotAFunction(Expr),
    #[error("type mismatch: expected `{expected}`, found `{actual}`")]
    TypeMismatch { expected: Expr, actual: Expr },
    #[error("`{0}` has no type")]
    Untyped(Const),
}

/// A type error, carrying the context and offending sub-expression it was
/// raised against so a caller can report exactly what failed and where.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}\n  while checking `{expr}`\n  in context {context}")]
pub struct TypeError {
    pub context: Context,
    pub expr: Expr,
    pub message: TypeMessage,
}

impl TypeError {
    pub fn new(context: &Context, expr: &Expr, message: TypeMessage) -> Self {
        TypeError { context: context.clone(), expr: expr.clone(), message }
    }
}
