
use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use super::{QueueCreationError, QueueElement, QueueError, RingQueueIter};

/// Fixed-capacity FIFO queue backed by a circular slot buffer.
///
/// The queue stores opaque handles and never inspects the values they refer to. Fullness and
/// emptiness are told apart by an explicit element count, so every slot of the buffer is usable.
/// The queue performs no synchronisation; share it between threads through a
/// [`RingLock`](crate::sync::RingLock).
pub struct RingQueue<T> {
  slots:        Box<[Option<T>]>,
  read_cursor:  usize,
  write_cursor: usize,
  len:          usize,
}

impl<T> RingQueue<T> {
  /// Creates an empty queue able to hold `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns [`QueueCreationError::ZeroCapacity`] when `capacity` is zero and
  /// [`QueueCreationError::AllocationFailure`] when the slot storage cannot be reserved.
  pub fn new(capacity: usize) -> Result<Self, QueueCreationError> {
    if capacity == 0 {
      return Err(QueueCreationError::ZeroCapacity);
    }
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity).map_err(|_| QueueCreationError::AllocationFailure { capacity })?;
    slots.resize_with(capacity, || None);
    Ok(Self { slots: slots.into_boxed_slice(), read_cursor: 0, write_cursor: 0, len: 0 })
  }

  /// Returns the maximum number of elements the queue can hold.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Indicates whether the queue holds no elements.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Indicates whether the queue holds `capacity` elements.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len == self.capacity()
  }

  /// Removes and returns the oldest element, or `None` when the queue is empty.
  pub fn dequeue(&mut self) -> Option<T> {
    if self.is_empty() {
      return None;
    }
    let item = self.slots[self.read_cursor].take();
    self.read_cursor = self.advance(self.read_cursor);
    self.len -= 1;
    item
  }

  /// Returns the oldest element without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    if self.is_empty() {
      return None;
    }
    self.slots[self.read_cursor].as_ref()
  }

  /// Removes up to `count` of the oldest elements and returns how many were removed.
  pub fn discard_oldest(&mut self, count: usize) -> usize {
    let discarded = count.min(self.len);
    for _ in 0..discarded {
      drop(self.dequeue());
    }
    discarded
  }

  /// Returns the queue to its empty state while keeping the slot storage.
  pub fn clear(&mut self) {
    for slot in self.slots.iter_mut() {
      *slot = None;
    }
    self.read_cursor = 0;
    self.write_cursor = 0;
    self.len = 0;
  }

  /// Iterates over the stored elements from oldest to newest.
  #[must_use]
  pub fn iter(&self) -> RingQueueIter<'_, T> {
    RingQueueIter::new(&self.slots, self.read_cursor, self.len)
  }

  fn advance(&self, cursor: usize) -> usize {
    (cursor + 1) % self.capacity()
  }
}

impl<T: QueueElement> RingQueue<T> {
  /// Appends an element at the back of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::NullElement`] when the handle is null and [`QueueError::Full`] when the
  /// queue already holds `capacity` elements. The queue is left unchanged in both cases.
  pub fn enqueue(&mut self, item: T) -> Result<(), QueueError<T>> {
    if item.is_null() {
      return Err(QueueError::NullElement(item));
    }
    if self.is_full() {
      return Err(QueueError::Full(item));
    }
    self.slots[self.write_cursor] = Some(item);
    self.write_cursor = self.advance(self.write_cursor);
    self.len += 1;
    Ok(())
  }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
  type IntoIter = RingQueueIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T> fmt::Debug for RingQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RingQueue")
      .field("capacity", &self.capacity())
      .field("len", &self.len)
      .field("read_cursor", &self.read_cursor)
      .field("write_cursor", &self.write_cursor)
      .finish()
  }
}
