use std::collections::HashMap as StdHashMap;

use fxhash::FxBuildHasher;

/// A `HashMap` using the non-cryptographic `fxhash` hasher.
///
/// Compiler-shaped workloads build many small maps keyed by identifiers;
/// the default `SipHash` is tuned for HashDoS resistance we don't need here.
pub type HashMap<K, V> = StdHashMap<K, V, FxBuildHasher>;
