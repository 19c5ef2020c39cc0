use std::rc::Rc;

/// A variable occurrence: a name paired with a non-negative disambiguation
/// index.
///
/// Index 0 refers to the innermost binder of that name in scope; each
/// additional binder of the same name going outward increments the index
/// by one. A name with only one binder in scope is referred to with index
/// 0, which may be omitted in surface syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Var {
    pub name: Rc<str>,
    pub index: u64,
}

impl Var {
    pub fn new(name: impl Into<Rc<str>>, index: u64) -> Self {
        Var { name: name.into(), index }
    }

    /// A variable referring to the innermost (and usually only) binder of `name`.
    pub fn free(name: impl Into<Rc<str>>) -> Self {
        Var::new(name, 0)
    }
}
