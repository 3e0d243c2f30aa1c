//! Mutable adapter over [`SplitGen`] for code written against `rand`.
//!
//! A [`Stream`] owns one generator and replaces it with its successor on
//! every draw. Substreams come from [`Stream::split`], which forks the
//! underlying generator without touching any other stream.

use rand::{Error as RandError, RngCore, SeedableRng};

use crate::rng::SplitGen;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stream {
    gen: SplitGen,
}

impl Stream {
    pub fn new(gen: SplitGen) -> Self {
        Self { gen }
    }

    /// Current generator state. Replaying it reproduces every later draw.
    pub fn state(&self) -> SplitGen {
        self.gen
    }

    /// Hand out an independent substream; this stream keeps the continuation.
    pub fn split(&mut self) -> Stream {
        let (continuation, spawned) = self.gen.fork();
        self.gen = continuation;
        Self::new(spawned)
    }

    /// Uniform value in `[0, max]`.
    pub fn next_bounded(&mut self, max: u64) -> u64 {
        let (value, next) = self.gen.next_u64_bounded(max);
        self.gen = next;
        value
    }

    /// Advance and return an `f64` in `[0, 1)` built from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = (1u64 << 53) as f64;
        ((self.next_u64() >> 11) as f64) / SCALE
    }
}

impl From<SplitGen> for Stream {
    fn from(gen: SplitGen) -> Self {
        Self::new(gen)
    }
}

impl RngCore for Stream {
    fn next_u32(&mut self) -> u32 {
        let (value, next) = self.gen.next_i32();
        self.gen = next;
        value as u32
    }

    fn next_u64(&mut self) -> u64 {
        let (value, next) = self.gen.next_u64();
        self.gen = next;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in chunks.by_ref() {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        let remainder = chunks.into_remainder();
        if !remainder.is_empty() {
            let word = self.next_u64().to_le_bytes();
            remainder.copy_from_slice(&word[..remainder.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Stream {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(SplitGen::from_bytes(&seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(SplitGen::new(state))
    }
}
