//! Interop between [`RandomSource`] and the `rand` ecosystem.
//!
//! - [`RngCoreSource`] turns any [`RngCore`] into a [`RandomSource`].
//! - [`SourceRng`] turns any [`RandomSource`] into an [`RngCore`], so the
//!   `rand` distribution machinery can run on top of it.

use rand::RngCore;

use crate::source::RandomSource;

/// A [`RandomSource`] drawing its primitive from a `rand` generator.
///
/// Only `next_u32` is taken from the wrapped generator. The wider outputs
/// keep the [`RandomSource`] derivations, so `next_u64` is always two
/// 32-bit draws high word first, even for generators whose own
/// [`RngCore::next_u64`] is composed differently.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use random_source::{RandomSource, RngCoreSource};
///
/// let mut source = RngCoreSource::new(ChaCha8Rng::seed_from_u64(7));
/// let value = source.next_f64();
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct RngCoreSource<R> {
    rng: R,
}

impl<R: RngCore> RngCoreSource<R> {
    /// Wrap a `rand` generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Borrow the wrapped generator.
    pub fn inner(&self) -> &R {
        &self.rng
    }

    /// Mutably borrow the wrapped generator.
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Unwrap the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for RngCoreSource<R> {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

/// An [`RngCore`] backed by a [`RandomSource`].
///
/// `next_u32`, `next_u64` and `fill_bytes` map one-to-one onto the source,
/// including any overrides it provides.
///
/// # Example
///
/// ```rust
/// use rand::Rng;
/// use random_source::{SeededSource, SourceRng};
///
/// let mut rng = SourceRng::new(SeededSource::new(42));
/// let roll: u8 = rng.random_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct SourceRng<S> {
    source: S,
}

impl<S: RandomSource> SourceRng<S> {
    /// Expose `source` as a `rand` generator.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Borrow the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: RandomSource> RngCore for SourceRng<S> {
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.source.fill_bytes(dst)
    }
}
