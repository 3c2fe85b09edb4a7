use core::ops::{Deref, DerefMut};
use std::sync::MutexGuard;

use fraktor_queue_core_rs::RingQueue;

/// Guard returned by [`StdRingLock`](crate::StdRingLock).
pub struct StdRingLockGuard<'a, T> {
  pub(crate) guard: MutexGuard<'a, RingQueue<T>>,
}

impl<T> Deref for StdRingLockGuard<'_, T> {
  type Target = RingQueue<T>;

  fn deref(&self) -> &Self::Target {
    &self.guard
  }
}

impl<T> DerefMut for StdRingLockGuard<'_, T> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.guard
  }
}
