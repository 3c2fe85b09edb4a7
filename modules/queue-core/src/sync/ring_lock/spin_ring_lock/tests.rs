use super::SpinRingLock;
use crate::{collections::queue::RingQueue, sync::RingLock};

#[test]
fn lock_exposes_the_ring() {
  let element = 4_u32;
  let lock = SpinRingLock::new(RingQueue::new(2).unwrap());
  lock.lock().enqueue(&element).unwrap();

  let guard = lock.lock();
  assert_eq!(guard.len(), 1);
  assert_eq!(guard.capacity(), 2);
}

#[test]
fn try_lock_fails_while_held() {
  let lock: SpinRingLock<&u8> = SpinRingLock::new(RingQueue::new(1).unwrap());
  let guard = lock.lock();
  assert!(lock.try_lock().is_none());
  drop(guard);
  assert!(lock.try_lock().is_some());
}

#[test]
fn into_inner_returns_the_ring() {
  let element = 'a';
  let lock = SpinRingLock::new(RingQueue::new(3).unwrap());
  lock.lock().enqueue(&element).unwrap();

  let mut queue = lock.into_inner();
  assert_eq!(queue.dequeue(), Some(&'a'));
}

#[test]
fn ring_lock_trait_round_trip() {
  let element = 9_i16;
  let lock = <SpinRingLock<&i16> as RingLock<&i16>>::new(RingQueue::new(1).unwrap());
  <SpinRingLock<&i16> as RingLock<&i16>>::lock(&lock).enqueue(&element).unwrap();

  let queue = <SpinRingLock<&i16> as RingLock<&i16>>::into_inner(lock);
  assert!(queue.is_full());
}
