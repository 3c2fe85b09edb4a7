#[cfg(test)]
mod tests;

use core::fmt;

/// Errors that prevent a queue from being constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueCreationError {
  /// A capacity of zero was requested.
  ZeroCapacity,
  /// The slot storage for the requested capacity could not be reserved.
  AllocationFailure {
    /// Capacity that was requested.
    capacity: usize,
  },
}

impl fmt::Display for QueueCreationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | QueueCreationError::ZeroCapacity => write!(f, "queue capacity must be positive"),
      | QueueCreationError::AllocationFailure { capacity } => {
        write!(f, "failed to allocate storage for {capacity} slots")
      },
    }
  }
}

impl core::error::Error for QueueCreationError {}
