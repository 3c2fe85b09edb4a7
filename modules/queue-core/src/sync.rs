#[cfg(feature = "alloc")]
mod ring_lock;

#[cfg(feature = "alloc")]
pub use ring_lock::{RingLock, RingLockGuard, SpinRingLock};
