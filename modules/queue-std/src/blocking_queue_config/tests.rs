use super::BlockingQueueConfig;

#[test]
fn default_uses_project_capacity_and_label() {
  let config = BlockingQueueConfig::default();
  assert_eq!(config.capacity(), 20);
  assert_eq!(config.label(), BlockingQueueConfig::DEFAULT_LABEL);
}

#[test]
fn builders_override_fields() {
  let config = BlockingQueueConfig::new(4).with_capacity(8).with_label("jobs");
  assert_eq!(config.capacity(), 8);
  assert_eq!(config.label(), "jobs");
}

#[test]
fn zero_capacity_is_accepted_until_construction() {
  let config = BlockingQueueConfig::new(0);
  assert_eq!(config.capacity(), 0);
}
