#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]

//! Blocking bounded queue for standard environments.
//!
//! [`BlockingQueue`] wraps the fixed-capacity ring from `fraktor-queue-core-rs` with a lock and two
//! counting [`Semaphore`]s so that producers wait for free slots and consumers wait for items
//! instead of being rejected.

mod blocking_queue;
mod blocking_queue_config;
mod semaphore;
mod std_ring_lock;
mod std_ring_lock_guard;

pub use blocking_queue::BlockingQueue;
pub use blocking_queue_config::BlockingQueueConfig;
pub use fraktor_queue_core_rs::{
  DEFAULT_CAPACITY, QueueCreationError, QueueElement, QueueError, RingLock, RingQueue, SpinRingLock,
};
pub use semaphore::Semaphore;
pub use std_ring_lock::StdRingLock;
pub use std_ring_lock_guard::StdRingLockGuard;
