//! The core random source abstraction.
//!
//! [`RandomSource`] has exactly one required method, [`next_u32`]. Every
//! other output is a fixed derivation over successive `next_u32` draws, so a
//! concrete generator only has to provide its raw 32-bit stream.
//!
//! Implementors may override any derived method for speed, but the override
//! must keep the documented draw order and bit layout. Callers rely on it:
//! the same primitive sequence must always produce the same derived values.
//!
//! [`next_u32`]: RandomSource::next_u32

use crate::error::{RandomError, RandomResult};

/// Largest `f64` strictly below `1.0`, i.e. `1 - 2^-53`.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Scale one 32-bit draw into the unit interval `[0.0, 1.0)`.
///
/// The draw is divided by `u32::MAX`. That quotient is exactly `1.0` for a
/// single input, `u32::MAX`, which is mapped to the largest `f64` below
/// `1.0` instead. Every other input returns the plain quotient, and `0`
/// returns `0.0`.
///
/// # Example
///
/// ```rust
/// use random_source::unit_f64;
///
/// assert_eq!(unit_f64(0), 0.0);
/// assert!(unit_f64(u32::MAX) < 1.0);
/// ```
pub fn unit_f64(draw: u32) -> f64 {
    let scaled = f64::from(draw) / f64::from(u32::MAX);
    if scaled < 1.0 { scaled } else { BELOW_ONE }
}

/// A source of pseudo-random values built on a single 32-bit primitive.
///
/// Seeding and internal state belong to the implementor. This trait only
/// composes the values returned by [`next_u32`](Self::next_u32).
///
/// A source is not safe for concurrent use: every call advances its
/// sequence position. Share one across threads through
/// [`SharedSource`](crate::SharedSource) or give each worker its own.
///
/// # Example
///
/// ```rust
/// use random_source::RandomSource;
///
/// struct Counter(u32);
///
/// impl RandomSource for Counter {
///     fn next_u32(&mut self) -> u32 {
///         self.0 = self.0.wrapping_add(1);
///         self.0
///     }
/// }
///
/// let mut source = Counter(0);
/// assert_eq!(source.next_u64(), 0x0000_0001_0000_0002);
/// ```
pub trait RandomSource {
    /// Return the next raw 32-bit value of the underlying sequence.
    fn next_u32(&mut self) -> u32;

    /// Return one draw reinterpreted as a signed 32-bit integer.
    ///
    /// This is a two's-complement bit cast, not a range remap, so the
    /// result may be negative.
    fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Return two draws composed into a 64-bit value.
    ///
    /// The first draw supplies the high 32 bits and the second the low
    /// 32 bits: `(first << 32) | second`.
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    /// Return the [`next_u64`](Self::next_u64) composition reinterpreted
    /// as a signed 64-bit integer.
    fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Fill `dest` with random bytes in place.
    ///
    /// Bytes are written in 4-byte groups in ascending offset order. Each
    /// group consumes one draw and receives its bytes least-significant
    /// first. A trailing group of 1 to 3 bytes consumes one more draw and
    /// takes only its low-order bytes. An empty slice consumes nothing.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(4);
        for chunk in chunks.by_ref() {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }

        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.next_u32().to_le_bytes();
            let len = tail.len();
            tail.copy_from_slice(&bytes[..len]);
        }
    }

    /// Fill an optional buffer with random bytes.
    ///
    /// `None` stands for an absent buffer and is rejected before any value
    /// is drawn, so the sequence position does not move. A present buffer
    /// is filled exactly like [`fill_bytes`](Self::fill_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `buffer` is `None`.
    fn next_bytes(&mut self, buffer: Option<&mut [u8]>) -> RandomResult<()> {
        let Some(buffer) = buffer else {
            tracing::debug!("rejected next_bytes call without a buffer");
            return Err(RandomError::InvalidArgument {
                name: "buffer",
                reason: "buffer is absent",
            });
        };
        self.fill_bytes(buffer);
        Ok(())
    }

    /// Return one draw scaled into `[0.0, 1.0)`.
    ///
    /// Uses a single draw divided by `u32::MAX`; see [`unit_f64`] for the
    /// upper boundary.
    fn next_f64(&mut self) -> f64 {
        unit_f64(self.next_u32())
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_i32(&mut self) -> i32 {
        (**self).next_i32()
    }

    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn next_i64(&mut self) -> i64 {
        (**self).next_i64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest)
    }

    fn next_bytes(&mut self, buffer: Option<&mut [u8]>) -> RandomResult<()> {
        (**self).next_bytes(buffer)
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_i32(&mut self) -> i32 {
        (**self).next_i32()
    }

    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn next_i64(&mut self) -> i64 {
        (**self).next_i64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest)
    }

    fn next_bytes(&mut self, buffer: Option<&mut [u8]>) -> RandomResult<()> {
        (**self).next_bytes(buffer)
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
