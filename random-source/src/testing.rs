//! Deterministic sources for tests.
//!
//! [`SequenceSource`] replays a scripted list of draws, and
//! [`CountingSource`] records how many primitive draws a piece of code
//! consumed. Together they make the draw order and draw count of any
//! derived operation directly observable.

use crate::error::{RandomError, RandomResult};
use crate::source::RandomSource;

/// A source that replays a fixed list of `u32` values.
///
/// When the list is exhausted, replay wraps around to the first value.
///
/// # Example
///
/// ```rust
/// use random_source::RandomSource;
/// use random_source::testing::SequenceSource;
///
/// let mut source = SequenceSource::new(vec![1, 2, 3]).unwrap();
/// assert_eq!(source.next_u64(), 0x0000_0001_0000_0002);
///
/// let mut buf = [0u8; 3];
/// source.fill_bytes(&mut buf);
/// assert_eq!(buf, [0x03, 0x00, 0x00]);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<u32>,
    position: usize,
}

impl SequenceSource {
    /// Create a source replaying `values` in order.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] if `values` is empty.
    pub fn new(values: impl Into<Vec<u32>>) -> RandomResult<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(RandomError::InvalidArgument {
                name: "values",
                reason: "sequence must contain at least one value",
            });
        }
        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Index of the value the next draw will return.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        value
    }
}

/// A wrapper that counts primitive draws made through it.
///
/// Only [`next_u32`](RandomSource::next_u32) is intercepted, so derived
/// operations are counted by the draws they actually consume.
#[derive(Debug, Clone)]
pub struct CountingSource<S> {
    inner: S,
    draws: u64,
}

impl<S: RandomSource> CountingSource<S> {
    /// Wrap `inner` with a draw counter starting at zero.
    pub fn new(inner: S) -> Self {
        Self { inner, draws: 0 }
    }

    /// Number of primitive draws since creation or the last reset.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Reset the draw counter to zero.
    pub fn reset_draws(&mut self) {
        self.draws = 0;
    }

    /// Borrow the wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the source, discarding the counter.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RandomSource> RandomSource for CountingSource<S> {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }
}
