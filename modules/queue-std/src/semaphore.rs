#[cfg(test)]
mod tests;

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Counting semaphore built on a mutex-protected counter and a condition variable.
///
/// Permits may be acquired and released from unrelated threads. The semaphore owns its own lock,
/// so waiting on it never requires holding any other lock.
#[derive(Debug, Default)]
pub struct Semaphore {
  permits: Mutex<usize>,
  ready:   Condvar,
}

impl Semaphore {
  /// Creates a semaphore holding `permits` permits.
  #[must_use]
  pub const fn new(permits: usize) -> Self {
    Self { permits: Mutex::new(permits), ready: Condvar::new() }
  }

  /// Blocks the calling thread until a permit is available and takes it.
  pub fn acquire(&self) {
    let mut permits =
      self.ready.wait_while(self.count(), |available| *available == 0).unwrap_or_else(PoisonError::into_inner);
    *permits -= 1;
  }

  /// Takes a permit if one is available, without blocking.
  #[must_use]
  pub fn try_acquire(&self) -> bool {
    self.try_acquire_many(1) == 1
  }

  /// Takes up to `max` available permits without blocking and returns how many were taken.
  #[must_use]
  pub fn try_acquire_many(&self, max: usize) -> usize {
    let mut permits = self.count();
    let taken = max.min(*permits);
    *permits -= taken;
    taken
  }

  /// Returns one permit and wakes a waiter.
  pub fn release(&self) {
    self.release_many(1);
  }

  /// Returns `count` permits and wakes up to `count` waiters.
  pub fn release_many(&self, count: usize) {
    if count == 0 {
      return;
    }
    {
      let mut permits = self.count();
      *permits += count;
    }
    if count == 1 {
      self.ready.notify_one();
    } else {
      self.ready.notify_all();
    }
  }

  /// Returns the number of permits currently available.
  #[must_use]
  pub fn available(&self) -> usize {
    *self.count()
  }

  // The counter is updated in a single step, so a poisoned lock still holds a valid count.
  fn count(&self) -> MutexGuard<'_, usize> {
    self.permits.lock().unwrap_or_else(PoisonError::into_inner)
  }
}
