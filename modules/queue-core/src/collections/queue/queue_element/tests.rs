use core::ptr::{self, NonNull};
use std::{boxed::Box, rc::Rc, sync::Arc};

use super::QueueElement;

#[test]
fn references_are_never_null() {
  let value = 5_i32;
  assert!(!(&value).is_null());
  assert!(!QueueElement::is_null(&"text"));
  assert!(!NonNull::from(&value).is_null());
}

#[test]
fn raw_pointers_report_null() {
  let mut value = 1.5_f64;
  let null_const: *const f64 = ptr::null();
  let null_mut: *mut f64 = ptr::null_mut();
  assert!(QueueElement::is_null(&null_const));
  assert!(QueueElement::is_null(&null_mut));
  assert!(!QueueElement::is_null(&ptr::from_ref(&value)));
  assert!(!QueueElement::is_null(&ptr::from_mut(&mut value)));
}

#[test]
fn option_is_null_when_none() {
  let value = 'c';
  assert!(QueueElement::is_null(&Option::<&char>::None));
  assert!(!QueueElement::is_null(&Some(&value)));
}

#[test]
fn owning_handles_are_never_null() {
  assert!(!QueueElement::is_null(&Box::new([1_u8, 2, 3])));
  assert!(!QueueElement::is_null(&Rc::new("rc")));
  assert!(!QueueElement::is_null(&Arc::new(42_u64)));
}
