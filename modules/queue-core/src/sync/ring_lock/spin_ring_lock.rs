#[cfg(test)]
mod tests;

use crate::{collections::queue::RingQueue, sync::RingLock};

/// [`RingLock`] backed by [`spin::Mutex`].
///
/// Suited to `no_std` hosts and to rings whose critical sections are a handful of cursor updates.
pub struct SpinRingLock<T>(spin::Mutex<RingQueue<T>>);

impl<T> SpinRingLock<T> {
  /// Wraps the provided queue.
  #[must_use]
  pub const fn new(queue: RingQueue<T>) -> Self {
    Self(spin::Mutex::new(queue))
  }

  /// Consumes the lock and returns the queue.
  pub fn into_inner(self) -> RingQueue<T> {
    self.0.into_inner()
  }

  /// Spins until the lock is acquired and returns a guard to the queue.
  pub fn lock(&self) -> spin::MutexGuard<'_, RingQueue<T>> {
    self.0.lock()
  }

  /// Attempts to acquire the lock without spinning.
  pub fn try_lock(&self) -> Option<spin::MutexGuard<'_, RingQueue<T>>> {
    self.0.try_lock()
  }
}

impl<T> RingLock<T> for SpinRingLock<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, RingQueue<T>>
  where
    T: 'a;

  fn new(queue: RingQueue<T>) -> Self {
    SpinRingLock::new(queue)
  }

  fn into_inner(self) -> RingQueue<T> {
    SpinRingLock::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    SpinRingLock::lock(self)
  }
}
