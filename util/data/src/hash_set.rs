use std::collections::HashSet as StdHashSet;

use fxhash::FxBuildHasher;

/// A `HashSet` using the non-cryptographic `fxhash` hasher.
pub type HashSet<T> = StdHashSet<T, FxBuildHasher>;
