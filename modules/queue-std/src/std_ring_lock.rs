
use std::sync::{Mutex, PoisonError};

use fraktor_queue_core_rs::{RingLock, RingQueue};

use crate::StdRingLockGuard;

/// [`RingLock`] backed by [`std::sync::Mutex`].
///
/// Every ring operation either completes or leaves the cursors untouched, so a lock poisoned by a
/// panicking holder is recovered rather than propagated.
pub struct StdRingLock<T> {
  inner: Mutex<RingQueue<T>>,
}

impl<T> StdRingLock<T> {
  /// Wraps the provided queue.
  #[must_use]
  pub const fn new(queue: RingQueue<T>) -> Self {
    Self { inner: Mutex::new(queue) }
  }

  /// Consumes the lock and returns the queue.
  pub fn into_inner(self) -> RingQueue<T> {
    self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  /// Blocks until the lock is acquired and returns a guard to the queue.
  pub fn lock(&self) -> StdRingLockGuard<'_, T> {
    let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
    StdRingLockGuard { guard }
  }
}

impl<T> RingLock<T> for StdRingLock<T> {
  type Guard<'a>
    = StdRingLockGuard<'a, T>
  where
    T: 'a;

  fn new(queue: RingQueue<T>) -> Self {
    StdRingLock::new(queue)
  }

  fn into_inner(self) -> RingQueue<T> {
    StdRingLock::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdRingLock::lock(self)
  }
}
