use std::format;

use super::QueueCreationError;

#[test]
fn display_variants() {
  assert_eq!(format!("{}", QueueCreationError::ZeroCapacity), "queue capacity must be positive");
  assert_eq!(
    format!("{}", QueueCreationError::AllocationFailure { capacity: 8 }),
    "failed to allocate storage for 8 slots"
  );
}

#[test]
fn allocation_failure_keeps_capacity() {
  let error = QueueCreationError::AllocationFailure { capacity: usize::MAX };
  if let QueueCreationError::AllocationFailure { capacity } = error {
    assert_eq!(capacity, usize::MAX);
  } else {
    panic!("Expected AllocationFailure variant");
  }
}

#[test]
fn copy_and_partial_eq() {
  let original = QueueCreationError::ZeroCapacity;
  let copied = original;
  assert_eq!(original, copied);
  assert_ne!(original, QueueCreationError::AllocationFailure { capacity: 0 });
}
