//! Fixed-capacity FIFO queue and the types its operations report.

mod queue_creation_error;
mod queue_element;
mod queue_error;
#[cfg(feature = "alloc")]
mod ring_queue;
#[cfg(feature = "alloc")]
mod ring_queue_iter;

pub use queue_creation_error::QueueCreationError;
pub use queue_element::QueueElement;
pub use queue_error::QueueError;
#[cfg(feature = "alloc")]
pub use ring_queue::RingQueue;
#[cfg(feature = "alloc")]
pub use ring_queue_iter::RingQueueIter;

/// Capacity used when a caller does not pick one explicitly.
pub const DEFAULT_CAPACITY: usize = 20;
