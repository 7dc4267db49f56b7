use std::cell::Cell;

/// A deterministic source of pseudo-random values.
///
/// Maps any integer to a value in `[0, 1)`. Implementations must be pure: the same input
/// always yields the same output, independent of any previous draws.
/// Any `Fn(i64) -> f64` closure is a valid source, which makes it easy to script draws in tests.
pub trait RandomSource {
    /// Value in `[0, 1)` associated with `n`.
    fn sample(&self, n: i64) -> f64;

    /// Index in `0..len` drawn with `n`, computed as `floor(sample(n) * len)`.
    /// `len` must be strictly positive.
    fn index(&self, n: i64, len: usize) -> usize {
        debug_assert!(len > 0, "cannot draw an index from an empty range");
        let v = self.sample(n);
        debug_assert!((0.0..1.0).contains(&v), "sample({n}) = {v} is outside [0, 1)");
        let idx = (v * len as f64).floor() as usize;
        usize::min(idx, len - 1)
    }

    /// Offset in `0..span` drawn with `n`, computed as `floor(sample(n) * span)`.
    fn offset(&self, n: i64, span: i32) -> i32 {
        let v = self.sample(n);
        debug_assert!((0.0..1.0).contains(&v), "sample({n}) = {v} is outside [0, 1)");
        (v * span as f64).floor() as i32
    }
}

impl<F> RandomSource for F
where
    F: Fn(i64) -> f64,
{
    fn sample(&self, n: i64) -> f64 {
        self(n)
    }
}

/// The default source: the fractional part of `sin(n) * 10000`, in double precision.
///
/// Not uniform and not independent between neighbouring inputs, but visually scattered,
/// and reproducible on every platform that evaluates `sin` identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SineHash;

impl SineHash {
    const AMPLITUDE: f64 = 10_000.0;
}

impl RandomSource for SineHash {
    #[inline]
    fn sample(&self, n: i64) -> f64 {
        let x = (n as f64).sin() * Self::AMPLITUDE;
        x - x.floor()
    }
}

/// Wraps a source and records how many draws went through it, handy to observe the retry loop.
#[derive(Debug, Default)]
pub struct CountingSource<S: RandomSource> {
    pub inner: S,
    pub n_draws: Cell<usize>,
}

impl<S: RandomSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            n_draws: Cell::new(0),
        }
    }

    pub fn draws(&self) -> usize {
        self.n_draws.get()
    }
}

impl<S: RandomSource> RandomSource for CountingSource<S> {
    fn sample(&self, n: i64) -> f64 {
        self.n_draws.set(self.n_draws.get() + 1);
        self.inner.sample(n)
    }
}
