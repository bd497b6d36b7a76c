//! A lock-guarded handle for sharing one source between threads.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::RandomResult;
use crate::source::RandomSource;

/// A cloneable, thread-safe handle to a single [`RandomSource`].
///
/// All clones draw from the same sequence. Each operation holds the lock
/// for its whole derivation, so the two draws of a `next_u64` or the draws
/// of one `fill_bytes` are never interleaved with draws from another clone.
///
/// # Example
///
/// ```rust
/// use random_source::{RandomSource, SeededSource, SharedSource};
///
/// let shared = SharedSource::new(SeededSource::new(42));
/// let mut worker = shared.clone();
/// let handle = std::thread::spawn(move || worker.next_u64());
/// let _ = handle.join();
/// ```
#[derive(Debug)]
pub struct SharedSource<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedSource<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: RandomSource> SharedSource<S> {
    /// Wrap `source` so it can be shared.
    pub fn new(source: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(source)),
        }
    }

    /// Run `f` with exclusive access to the underlying source.
    pub fn with_source<T>(&self, f: impl FnOnce(&mut S) -> T) -> T {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    // A poisoned source still sits at a valid sequence position.
    fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering random source from poisoned lock");
            poisoned.into_inner()
        })
    }
}

impl<S: RandomSource> RandomSource for SharedSource<S> {
    fn next_u32(&mut self) -> u32 {
        self.lock().next_u32()
    }

    fn next_i32(&mut self) -> i32 {
        self.lock().next_i32()
    }

    fn next_u64(&mut self) -> u64 {
        self.lock().next_u64()
    }

    fn next_i64(&mut self) -> i64 {
        self.lock().next_i64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.lock().fill_bytes(dest)
    }

    fn next_bytes(&mut self, buffer: Option<&mut [u8]>) -> RandomResult<()> {
        self.lock().next_bytes(buffer)
    }

    fn next_f64(&mut self) -> f64 {
        self.lock().next_f64()
    }
}
