
use core::{fmt, marker::PhantomData};

use fraktor_queue_core_rs::{QueueCreationError, QueueElement, QueueError, RingLock, RingQueue};
use tracing::{debug, trace, warn};

use crate::{BlockingQueueConfig, Semaphore, StdRingLock};

const TRACING_TARGET: &str = "fraktor::queue";

/// Bounded FIFO queue whose producers wait for free slots and whose consumers wait for items.
///
/// The ring is guarded by a [`RingLock`] that is held only for a single non-blocking ring
/// operation. Waiting happens on two [`Semaphore`]s before the lock is taken: `free_slots` starts
/// at the capacity and `available_items` at zero, and a permit moves from one to the other every
/// time an element enters or leaves the ring. Share the queue between threads through an
/// `Arc`.
pub struct BlockingQueue<T, L = StdRingLock<T>>
where
  L: RingLock<T>, {
  ring:            L,
  free_slots:      Semaphore,
  available_items: Semaphore,
  capacity:        usize,
  label:           &'static str,
  _pd:             PhantomData<fn() -> T>,
}

impl<T, L> BlockingQueue<T, L>
where
  L: RingLock<T>,
{
  /// Target used by every tracing event the queue emits.
  pub const TRACING_TARGET: &'static str = TRACING_TARGET;

  /// Creates an empty queue able to hold `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns a [`QueueCreationError`] when `capacity` is zero or the ring storage cannot be
  /// allocated.
  pub fn new(capacity: usize) -> Result<Self, QueueCreationError> {
    Self::from_config(BlockingQueueConfig::new(capacity))
  }

  /// Creates an empty queue from the provided configuration.
  ///
  /// # Errors
  ///
  /// Returns a [`QueueCreationError`] when the configured capacity is zero or the ring storage
  /// cannot be allocated.
  pub fn from_config(config: BlockingQueueConfig) -> Result<Self, QueueCreationError> {
    let capacity = config.capacity();
    let label = config.label();
    let ring = RingQueue::new(capacity)?;
    debug!(target: TRACING_TARGET, label, capacity, "blocking queue created");
    Ok(Self {
      ring: L::new(ring),
      free_slots: Semaphore::new(capacity),
      available_items: Semaphore::new(0),
      capacity,
      label,
      _pd: PhantomData,
    })
  }

  /// Returns the maximum number of elements the queue can hold.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the label attached to tracing events.
  #[must_use]
  pub const fn label(&self) -> &'static str {
    self.label
  }

  /// Returns the number of stored elements.
  ///
  /// The value is a snapshot and may be stale as soon as it is returned.
  #[must_use]
  pub fn len(&self) -> usize {
    self.ring.lock().len()
  }

  /// Indicates whether the queue holds no elements (snapshot).
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.ring.lock().is_empty()
  }

  /// Indicates whether the queue holds `capacity` elements (snapshot).
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.ring.lock().is_full()
  }

  /// Removes and returns the oldest element, blocking while the queue is empty.
  pub fn dequeue(&self) -> T {
    loop {
      if !self.available_items.try_acquire() {
        trace!(target: TRACING_TARGET, label = self.label, "consumer waiting for an item");
        self.available_items.acquire();
      }
      if let Some(item) = self.take_claimed() {
        return item;
      }
    }
  }

  /// Removes and returns the oldest element, or `None` when no element is available right now.
  pub fn try_dequeue(&self) -> Option<T> {
    if !self.available_items.try_acquire() {
      return None;
    }
    self.take_claimed()
  }

  /// Discards every element that no in-flight operation has claimed and returns how many were
  /// discarded.
  ///
  /// The ring and both permit counts are reset in the same critical section, and the vacated
  /// slots are handed to waiting producers. On a queue without concurrent callers this leaves the
  /// queue empty with `capacity` free slots. An element whose item permit is already held by a
  /// running `dequeue`, or whose `enqueue` has not yet published its permit, is kept so that the
  /// running operation completes normally.
  pub fn clear(&self) -> usize {
    let discarded = {
      let mut ring = self.ring.lock();
      let claimable = self.available_items.try_acquire_many(ring.len());
      if claimable == ring.len() {
        ring.clear();
        claimable
      } else {
        ring.discard_oldest(claimable)
      }
    };
    self.free_slots.release_many(discarded);
    debug!(target: TRACING_TARGET, label = self.label, discarded, "blocking queue cleared");
    discarded
  }

  /// Consumes the queue and returns the underlying ring.
  pub fn into_inner(self) -> RingQueue<T> {
    self.ring.into_inner()
  }

  // Caller holds an item permit.
  fn take_claimed(&self) -> Option<T> {
    let item = self.ring.lock().dequeue();
    match item {
      | Some(item) => {
        self.free_slots.release();
        Some(item)
      },
      | None => {
        warn!(target: TRACING_TARGET, label = self.label, "item permit found an empty ring");
        None
      },
    }
  }
}

impl<T, L> BlockingQueue<T, L>
where
  T: QueueElement,
  L: RingLock<T>,
{
  /// Appends an element, blocking while the queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::NullElement`] for a null handle. The check happens before waiting, so a
  /// rejected call never blocks and never consumes a free slot.
  pub fn enqueue(&self, item: T) -> Result<(), QueueError<T>> {
    if item.is_null() {
      return Err(QueueError::NullElement(item));
    }
    if !self.free_slots.try_acquire() {
      trace!(target: TRACING_TARGET, label = self.label, "producer waiting for a free slot");
      self.free_slots.acquire();
    }
    self.publish(item)
  }

  /// Appends an element if a slot is free right now.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::NullElement`] for a null handle and [`QueueError::Full`] when no slot
  /// is free.
  pub fn try_enqueue(&self, item: T) -> Result<(), QueueError<T>> {
    if item.is_null() {
      return Err(QueueError::NullElement(item));
    }
    if !self.free_slots.try_acquire() {
      return Err(QueueError::Full(item));
    }
    self.publish(item)
  }

  // Caller holds a free-slot permit.
  fn publish(&self, item: T) -> Result<(), QueueError<T>> {
    let result = self.ring.lock().enqueue(item);
    match result {
      | Ok(()) => {
        self.available_items.release();
        Ok(())
      },
      | Err(error) => {
        warn!(target: TRACING_TARGET, label = self.label, %error, "ring rejected an element holding a free slot");
        self.free_slots.release();
        Err(error)
      },
    }
  }
}

impl<T, L> fmt::Debug for BlockingQueue<T, L>
where
  L: RingLock<T>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BlockingQueue")
      .field("label", &self.label)
      .field("capacity", &self.capacity)
      .field("free_slots", &self.free_slots.available())
      .field("available_items", &self.available_items.available())
      .finish_non_exhaustive()
  }
}
