//! Splittable pseudo-random generator.
//!
//! A [`SplitGen`] is an immutable `(seed, gamma)` pair. Every operation takes
//! the generator by value and hands back a successor, so callers thread state
//! explicitly and never share anything mutable. [`SplitGen::fork`] derives a
//! second stream with its own gamma, which is how independent streams are
//! handed to parallel workers or sibling test cases.
//!
//! The mixing functions are fast scramblers, not a cryptographic primitive.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::mix::{mix32, mix64, mix_gamma, GOLDEN_GAMMA};

/// Largest value representable in 63 bits; bounded draws below this reduce
/// a right-shifted candidate so the top bit never participates.
const MAX_U63: u64 = i64::MAX as u64;

/// Immutable generator state: a position in a stream plus the stream's increment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitGen {
    seed: u64,
    /// Odd increment applied on every step. Distinguishes sibling streams.
    gamma: u64,
}

impl SplitGen {
    /// Root generator on the default golden-ratio stream.
    pub const fn new(seed: u64) -> Self {
        Self::with_gamma(seed, GOLDEN_GAMMA)
    }

    /// Generator with an explicit increment. The caller is responsible for
    /// `gamma` being odd; see [`SplitGen::try_with_gamma`] for a checked form.
    pub const fn with_gamma(seed: u64, gamma: u64) -> Self {
        Self { seed, gamma }
    }

    /// Like [`SplitGen::with_gamma`] but rejects even increments.
    pub fn try_with_gamma(seed: u64, gamma: u64) -> Result<Self> {
        if gamma & 1 == 0 {
            return Err(Error::EvenGamma(gamma));
        }
        Ok(Self::with_gamma(seed, gamma))
    }

    /// Fold an arbitrary byte string into a root generator.
    ///
    /// Bytes are consumed left to right in the widest chunk that still fits:
    /// 8, then 4, 2, 1. Chunks are read big-endian and narrower chunks are
    /// sign-extended to 64 bits before mixing. The fold is order-sensitive.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut h = 0u64;
        let mut rest = bytes;
        while let Some((word, width)) = leading_word(rest) {
            h ^= mix64(word);
            rest = &rest[width..];
        }
        Self::with_gamma(h, mix_gamma(h.wrapping_add(GOLDEN_GAMMA)))
    }

    /// Current position in the stream.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Odd stream increment.
    pub const fn gamma(&self) -> u64 {
        self.gamma
    }

    #[inline]
    const fn step(&self) -> u64 {
        self.seed.wrapping_add(self.gamma)
    }

    /// Advance one step and return a uniformly distributed `u64`.
    #[inline]
    pub fn next_u64(self) -> (u64, SplitGen) {
        let s = self.step();
        (mix64(s), Self::with_gamma(s, self.gamma))
    }

    /// Advance one step and return a uniformly distributed `i32`.
    ///
    /// Uses a separate finalizer so the 32-bit stream does not echo the
    /// 64-bit one.
    #[inline]
    pub fn next_i32(self) -> (i32, SplitGen) {
        let s = self.step();
        (mix32(s), Self::with_gamma(s, self.gamma))
    }

    /// Advance one step and return a value uniform over `[0, max]`.
    ///
    /// The successor's seed is the mixed step value, independent of how many
    /// candidates the reduction had to reject.
    pub fn next_u64_bounded(self, max: u64) -> (u64, SplitGen) {
        let s = mix64(self.step());
        (reduce(s, max), Self::with_gamma(s, self.gamma))
    }

    /// Split into a continuation of this stream and a brand new stream.
    ///
    /// The first child sits two steps ahead on the parent's gamma. The second
    /// child gets a seed and gamma freshly derived from those two steps.
    pub fn fork(self) -> (SplitGen, SplitGen) {
        let s = self.step();
        let child_seed = mix64(s);
        let s = s.wrapping_add(self.gamma);
        let child_gamma = mix_gamma(s);
        (
            Self::with_gamma(s, self.gamma),
            Self::with_gamma(child_seed, child_gamma),
        )
    }

    /// Fold two generators into one. Both inputs are mixed before they are
    /// combined so related states do not cancel out.
    pub fn join(self, other: SplitGen) -> SplitGen {
        Self::with_gamma(
            mix64(self.seed) ^ mix64(other.seed),
            mix_gamma(mix64(self.gamma) ^ mix64(other.gamma)),
        )
    }
}

/// Map a mixed 64-bit value onto `[0, max]` without modulo bias.
fn reduce(s: u64, max: u64) -> u64 {
    // max = 2^k - 1: masking keeps the distribution exact.
    if max & max.wrapping_add(1) == 0 {
        return s & max;
    }

    let mut retries = 0u32;
    let value = if max < MAX_U63 {
        let bound = max + 1;
        let limit = (MAX_U63 / bound) * bound;
        let mut r = s >> 1;
        while r >= limit {
            r = mix64(r) >> 1;
            retries += 1;
        }
        r % bound
    } else {
        // max + 1 exceeds 63 bits; reject on the raw stream instead.
        let mut r = s;
        while r > max {
            r = mix64(r);
            retries += 1;
        }
        r
    };

    if retries > 0 {
        trace!(max, retries, "bounded draw rejected biased candidates");
    }
    value
}

/// Widest big-endian word available at the head of `bytes`, with its width.
fn leading_word(bytes: &[u8]) -> Option<(u64, usize)> {
    match *bytes {
        [a, b, c, d, e, f, g, h, ..] => Some((u64::from_be_bytes([a, b, c, d, e, f, g, h]), 8)),
        [a, b, c, d, ..] => Some((i64::from(i32::from_be_bytes([a, b, c, d])) as u64, 4)),
        [a, b, ..] => Some((i64::from(i16::from_be_bytes([a, b])) as u64, 2)),
        [a] => Some((i64::from(a as i8) as u64, 1)),
        [] => None,
    }
}
