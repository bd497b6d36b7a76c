//! # random-source
//!
//! A small abstraction over pseudo-random number generators built around a
//! single primitive: produce the next `u32`.
//!
//! Everything else a caller usually wants from a generator is derived from
//! that one draw by the [`RandomSource`] trait:
//!
//! - [`next_i32`](RandomSource::next_i32): the same draw, signed view
//! - [`next_u64`](RandomSource::next_u64) / [`next_i64`](RandomSource::next_i64):
//!   two draws, high word first
//! - [`fill_bytes`](RandomSource::fill_bytes) / [`next_bytes`](RandomSource::next_bytes):
//!   one draw per 4 bytes, least-significant byte first
//! - [`next_f64`](RandomSource::next_f64): one draw scaled into `[0.0, 1.0)`
//!
//! ## Crate Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  testing          SequenceSource, CountingSource            │
//! │  shared           SharedSource (Arc<Mutex<S>>)              │
//! │  seeded           SeededSource (ChaCha8), SourceConfig      │
//! │  adapters         RngCoreSource, SourceRng (rand interop)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  source           RandomSource trait + derived operations   │
//! │  error            RandomError, RandomResult                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use random_source::{RandomSource, SeededSource};
//!
//! let mut source = SeededSource::new(42);
//! let wide = source.next_u64();
//! let ratio = source.next_f64();
//! assert!((0.0..1.0).contains(&ratio));
//!
//! let mut buf = [0u8; 7];
//! source.fill_bytes(&mut buf);
//! # let _ = wide;
//! ```
//!
//! Concrete generator algorithms are not part of this crate. Implement
//! [`RandomSource::next_u32`] for your own engine, or wrap any
//! [`rand::RngCore`] with [`RngCoreSource`].

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod adapters;
mod error;
mod seeded;
mod shared;
mod source;
pub mod testing;

// Error exports
pub use error::{RandomError, RandomResult};

// Core trait exports
pub use source::{RandomSource, unit_f64};

// Adapter exports
pub use adapters::{RngCoreSource, SourceRng};
pub use seeded::{SeededSource, SourceConfig};
pub use shared::SharedSource;
