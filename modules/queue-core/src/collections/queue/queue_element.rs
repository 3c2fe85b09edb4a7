#[cfg(test)]
mod tests;

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, rc::Rc, sync::Arc};
use core::ptr::NonNull;

/// Opaque handle stored by queues.
///
/// Queues never look behind a handle. The only question they ask is whether the handle refers to
/// nothing, in which case the element is rejected instead of stored.
pub trait QueueElement {
  /// Returns `true` when the handle does not refer to any value.
  fn is_null(&self) -> bool;
}

impl<T: ?Sized> QueueElement for &T {
  fn is_null(&self) -> bool {
    false
  }
}

impl<T: ?Sized> QueueElement for &mut T {
  fn is_null(&self) -> bool {
    false
  }
}

impl<T: ?Sized> QueueElement for NonNull<T> {
  fn is_null(&self) -> bool {
    false
  }
}

impl<T: ?Sized> QueueElement for *const T {
  fn is_null(&self) -> bool {
    <*const T>::is_null(*self)
  }
}

impl<T: ?Sized> QueueElement for *mut T {
  fn is_null(&self) -> bool {
    <*mut T>::is_null(*self)
  }
}

impl<T> QueueElement for Option<T> {
  fn is_null(&self) -> bool {
    self.is_none()
  }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> QueueElement for Box<T> {
  fn is_null(&self) -> bool {
    false
  }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> QueueElement for Rc<T> {
  fn is_null(&self) -> bool {
    false
  }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> QueueElement for Arc<T> {
  fn is_null(&self) -> bool {
    false
  }
}
