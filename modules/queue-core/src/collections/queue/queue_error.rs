use core::fmt;

/// Errors reported when a queue refuses an element.
///
/// Every variant hands the rejected element back so the caller keeps ownership of the handle.
#[derive(Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// The queue holds `capacity` elements and cannot accept another one.
  Full(T),
  /// The element is a null handle and was never stored.
  NullElement(T),
}

impl<T> QueueError<T> {
  /// Extracts the element carried by the error.
  #[must_use]
  pub fn into_item(self) -> T {
    match self {
      | Self::Full(item) | Self::NullElement(item) => item,
    }
  }

  /// Returns a reference to the element carried by the error.
  #[must_use]
  pub const fn item(&self) -> &T {
    match self {
      | Self::Full(item) | Self::NullElement(item) => item,
    }
  }

  /// Indicates whether the queue rejected the element for lack of space.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    matches!(self, Self::Full(_))
  }

  /// Indicates whether the element was rejected for being a null handle.
  #[must_use]
  pub const fn is_null_element(&self) -> bool {
    matches!(self, Self::NullElement(_))
  }
}

// Handles may be raw pointers or references to non-Debug data, so the payload is not printed.
impl<T> fmt::Debug for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Full(_) => f.write_str("Full(..)"),
      | Self::NullElement(_) => f.write_str("NullElement(..)"),
    }
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Full(_) => write!(f, "queue is full"),
      | Self::NullElement(_) => write!(f, "null element rejected"),
    }
  }
}

impl<T> core::error::Error for QueueError<T> {}
