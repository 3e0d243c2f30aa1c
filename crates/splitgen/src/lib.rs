//! Splittable, immutable pseudo-random generators.
//!
//! [`SplitGen`] values never change: each draw returns the value together
//! with the successor generator. [`SplitGen::fork`] derives an independent
//! stream, so per-thread or per-test-case generators can be handed out with
//! no synchronisation at all.

pub mod error;
pub mod io;
mod mix;
pub mod range;
pub mod rng;
pub mod stream;
#[cfg(any(test, feature = "proptest-support"))]
pub mod strategy;

pub use error::{Error, Result};
pub use mix::GOLDEN_GAMMA;
pub use range::{Range, Size};
pub use rng::SplitGen;
pub use stream::Stream;

/// Fork `gen` into `count` independent generators plus the continuation.
///
/// Each returned generator is the new-stream child of a successive fork, so
/// the list is stable for a given root and `count`.
pub fn fork_many(gen: SplitGen, count: usize) -> (Vec<SplitGen>, SplitGen) {
    let mut streams = Vec::with_capacity(count);
    let mut current = gen;
    for _ in 0..count {
        let (continuation, spawned) = current.fork();
        streams.push(spawned);
        current = continuation;
    }
    (streams, current)
}
