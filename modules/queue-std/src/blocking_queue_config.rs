#[cfg(test)]
mod tests;

use fraktor_queue_core_rs::DEFAULT_CAPACITY;

/// Configuration options for [`BlockingQueue`](crate::BlockingQueue).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockingQueueConfig {
  capacity: usize,
  label:    &'static str,
}

impl BlockingQueueConfig {
  /// Label attached to tracing events when none is configured.
  pub const DEFAULT_LABEL: &'static str = "blocking-queue";

  /// Creates a configuration for a queue holding at most `capacity` elements.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { capacity, label: Self::DEFAULT_LABEL }
  }

  /// Overrides the maximum number of stored elements.
  #[must_use]
  pub const fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Overrides the label used to tell queues apart in tracing output.
  #[must_use]
  pub const fn with_label(mut self, label: &'static str) -> Self {
    self.label = label;
    self
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the configured label.
  #[must_use]
  pub const fn label(&self) -> &'static str {
    self.label
  }
}

impl Default for BlockingQueueConfig {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}
