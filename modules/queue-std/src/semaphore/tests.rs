use std::{
  sync::{Arc, mpsc},
  thread,
  time::Duration,
};

use super::Semaphore;

#[test]
fn new_semaphore_reports_permits() {
  let semaphore = Semaphore::new(3);
  assert_eq!(semaphore.available(), 3);
}

#[test]
fn default_semaphore_has_no_permits() {
  let semaphore = Semaphore::default();
  assert_eq!(semaphore.available(), 0);
  assert!(!semaphore.try_acquire());
}

#[test]
fn acquire_takes_a_permit() {
  let semaphore = Semaphore::new(2);
  semaphore.acquire();
  assert_eq!(semaphore.available(), 1);
  semaphore.acquire();
  assert_eq!(semaphore.available(), 0);
}

#[test]
fn try_acquire_fails_without_permits() {
  let semaphore = Semaphore::new(1);
  assert!(semaphore.try_acquire());
  assert!(!semaphore.try_acquire());
  semaphore.release();
  assert!(semaphore.try_acquire());
}

#[test]
fn try_acquire_many_takes_at_most_available() {
  let semaphore = Semaphore::new(4);
  assert_eq!(semaphore.try_acquire_many(3), 3);
  assert_eq!(semaphore.try_acquire_many(3), 1);
  assert_eq!(semaphore.try_acquire_many(3), 0);
  assert_eq!(semaphore.available(), 0);
}

#[test]
fn release_many_adds_permits() {
  let semaphore = Semaphore::new(0);
  semaphore.release_many(5);
  assert_eq!(semaphore.available(), 5);
  semaphore.release_many(0);
  assert_eq!(semaphore.available(), 5);
}

#[test]
fn acquire_blocks_until_release() {
  let semaphore = Arc::new(Semaphore::new(0));
  let (sender, receiver) = mpsc::channel();

  let waiter = {
    let semaphore = Arc::clone(&semaphore);
    thread::spawn(move || {
      semaphore.acquire();
      sender.send(()).unwrap();
    })
  };

  assert!(receiver.recv_timeout(Duration::from_millis(50)).is_err());
  semaphore.release();
  receiver.recv_timeout(Duration::from_secs(5)).unwrap();
  waiter.join().unwrap();
  assert_eq!(semaphore.available(), 0);
}

#[test]
fn release_many_wakes_every_waiter() {
  let semaphore = Arc::new(Semaphore::new(0));
  let waiters: Vec<_> = (0..4)
    .map(|_| {
      let semaphore = Arc::clone(&semaphore);
      thread::spawn(move || semaphore.acquire())
    })
    .collect();

  thread::sleep(Duration::from_millis(20));
  semaphore.release_many(4);
  for waiter in waiters {
    waiter.join().unwrap();
  }
  assert_eq!(semaphore.available(), 0);
}
