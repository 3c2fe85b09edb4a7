use core::ops::{Deref, DerefMut};

use crate::collections::queue::RingQueue;

mod spin_ring_lock;

pub use spin_ring_lock::SpinRingLock;

/// Lock guarding a [`RingQueue`] that is shared between threads.
///
/// Implementations must keep the critical section free of any blocking wait other than the lock
/// acquisition itself; callers only hold the guard for a single ring operation.
pub trait RingLock<T> {
  /// Guard type returned by [`RingLock::lock`].
  type Guard<'a>: Deref<Target = RingQueue<T>> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Wraps the provided queue.
  fn new(queue: RingQueue<T>) -> Self;

  /// Consumes the lock and returns the queue.
  fn into_inner(self) -> RingQueue<T>;

  /// Acquires the lock and returns a guard to the queue.
  fn lock(&self) -> Self::Guard<'_>;
}

/// Convenience alias for guards produced by [`RingLock`].
pub type RingLockGuard<'a, L, T> = <L as RingLock<T>>::Guard<'a>;
