//! Size-dependent sampling ranges.
//!
//! A [`Range`] pairs an origin with a function from [`Size`] to bounds. The
//! origin is where consumers shrink towards; the bounds are what a draw is
//! taken from.

use std::fmt;
use std::sync::Arc;

use crate::rng::SplitGen;

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_75;

/// Size parameter for a draw. Its meaning depends on the consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(i32);

impl Size {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    pub const fn inc(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Scale by the golden ratio conjugate, truncating towards zero.
    pub fn golden(self) -> Self {
        Self((f64::from(self.0) * GOLDEN_RATIO_CONJUGATE) as i32)
    }
}

type BoundsFn<T> = dyn Fn(Size) -> (T, T) + Send + Sync;

pub struct Range<T> {
    origin: T,
    bounds: Arc<BoundsFn<T>>,
}

impl<T> Clone for Range<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            origin: self.origin.clone(),
            bounds: Arc::clone(&self.bounds),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl<T: Copy + Ord + Send + Sync + 'static> Range<T> {
    pub fn new<F>(origin: T, bounds: F) -> Self
    where
        F: Fn(Size) -> (T, T) + Send + Sync + 'static,
    {
        Self {
            origin,
            bounds: Arc::new(bounds),
        }
    }

    /// A range that always yields `x`.
    pub fn singleton(x: T) -> Self {
        Self::new(x, move |_| (x, x))
    }

    /// Constant bounds `x..=y` with the origin at `x`.
    pub fn constant(x: T, y: T) -> Self {
        Self::constant_from(x, x, y)
    }

    /// Constant bounds `x..=y` with an independent origin `z`.
    pub fn constant_from(z: T, x: T, y: T) -> Self {
        Self::new(z, move |_| (x, y))
    }

    pub fn origin(&self) -> T {
        self.origin
    }

    /// Raw bounds for `size`. The pair is not necessarily ordered.
    pub fn bounds(&self, size: Size) -> (T, T) {
        (self.bounds)(size)
    }

    pub fn lower_bound(&self, size: Size) -> T {
        let (x, y) = self.bounds(size);
        x.min(y)
    }

    pub fn upper_bound(&self, size: Size) -> T {
        let (x, y) = self.bounds(size);
        x.max(y)
    }

    pub fn map<U, F>(&self, f: F) -> Range<U>
    where
        U: Copy + Ord + Send + Sync + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let bounds = Arc::clone(&self.bounds);
        let origin = f(self.origin);
        Range::new(origin, move |size| {
            let (x, y) = bounds(size);
            (f(x), f(y))
        })
    }
}

impl SplitGen {
    /// Draw uniformly from the bounds of `range` at `size`, inclusive.
    ///
    /// Works across the whole `i64` domain; the span is computed in wrapping
    /// unsigned arithmetic so `i64::MIN..=i64::MAX` does not overflow.
    pub fn next_in_range(self, range: &Range<i64>, size: Size) -> (i64, SplitGen) {
        let lo = range.lower_bound(size);
        let hi = range.upper_bound(size);
        let span = hi.wrapping_sub(lo) as u64;
        let (offset, next) = self.next_u64_bounded(span);
        (lo.wrapping_add(offset as i64), next)
    }
}
