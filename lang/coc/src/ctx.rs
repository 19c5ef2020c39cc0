use std::fmt;
use std::rc::Rc;

use data::string::separated;

use crate::expr::Expr;
use crate::shift::shift;
use crate::var::Var;

/// A typing context: an ordered sequence of `(name, type)` pairs.
///
/// The same name may appear more than once, modeling shadowing directly.
/// Lookup of `V(name, index)` scans from the most recently bound entry,
/// skipping `index` occurrences of `name` before returning one. A plain
/// `Vec` with linear lookup is sufficient; contexts in well-typed programs
/// stay small, and the access pattern (push on entering a binder, pop on
/// leaving it) is exactly a stack's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    entries: Vec<(Rc<str>, Expr)>,
}

impl Context {
    pub fn empty() -> Self {
        Context { entries: Vec::new() }
    }

    /// Returns a new context with `(name, ty)` as the innermost entry.
    pub fn extend(&self, name: impl Into<Rc<str>>, ty: Expr) -> Context {
        let mut entries = self.entries.clone();
        entries.push((name.into(), ty));
        Context { entries }
    }

    pub fn lookup(&self, v: &Var) -> Option<&Expr> {
        let mut remaining = v.index;
        for (name, ty) in self.entries.iter().rev() {
            if name.as_ref() == v.name.as_ref() {
                if remaining == 0 {
                    return Some(ty);
                }
                remaining -= 1;
            }
        }
        None
    }

    /// Shifts every entry's type by `d` over `name`, as required when
    /// entering a new binder of that name: existing entries move one level
    /// further from the head, so any of their free occurrences of `name`
    /// must be shifted to keep referring to the same binder. The new
    /// binder's own domain is pushed separately, unshifted.
    pub fn shift(&self, name: &str, d: i64) -> Context {
        Context {
            entries: self
                .entries
                .iter()
                .map(|(n, ty)| (n.clone(), shift(d, name, ty)))
                .collect(),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> =
            self.entries.iter().map(|(name, ty)| format!("{name} : {ty}")).collect();
        write!(f, "[{}]", separated(", ", rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Const;

    #[test]
    fn lookup_finds_innermost_first() {
        let ctx = Context::empty()
            .extend("x", Expr::Const(Const::Star))
            .extend("x", Expr::Const(Const::Box));
        assert_eq!(ctx.lookup(&Var::new("x", 0)), Some(&Expr::Const(Const::Box)));
        assert_eq!(ctx.lookup(&Var::new("x", 1)), Some(&Expr::Const(Const::Star)));
        assert_eq!(ctx.lookup(&Var::new("x", 2)), None);
    }

    #[test]
    fn lookup_of_unbound_name_is_none() {
        let ctx = Context::empty().extend("x", Expr::Const(Const::Star));
        assert_eq!(ctx.lookup(&Var::new("y", 0)), None);
    }
}
