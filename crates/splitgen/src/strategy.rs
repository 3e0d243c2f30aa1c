//! proptest strategies producing generators.

use proptest::prelude::*;

use crate::rng::SplitGen;

/// Any state with an odd gamma.
pub fn any_split_gen() -> impl Strategy<Value = SplitGen> {
    (any::<u64>(), any::<u64>()).prop_map(|(seed, gamma)| SplitGen::with_gamma(seed, gamma | 1))
}

/// Roots built by folding arbitrary byte strings.
pub fn seeded_split_gen() -> impl Strategy<Value = SplitGen> {
    proptest::collection::vec(any::<u8>(), 0..64).prop_map(|bytes| SplitGen::from_bytes(&bytes))
}
