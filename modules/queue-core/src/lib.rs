#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![no_std]

//! Fixed-capacity queue primitives shared by every fraktor runtime.
//!
//! The crate provides the non-blocking [`RingQueue`], the handle contract its elements follow
//! ([`QueueElement`]) and the [`RingLock`] abstraction runtimes implement to guard a ring that is
//! shared between threads. Nothing here blocks or allocates after construction; blocking
//! behaviour lives in the std crate.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(test)]
extern crate std;

/// Queue collections.
pub mod collections;
/// Lock abstractions guarding shared rings.
pub mod sync;

pub use collections::queue::{DEFAULT_CAPACITY, QueueCreationError, QueueElement, QueueError};
#[cfg(feature = "alloc")]
pub use collections::queue::{RingQueue, RingQueueIter};
#[cfg(feature = "alloc")]
pub use sync::{RingLock, RingLockGuard, SpinRingLock};
