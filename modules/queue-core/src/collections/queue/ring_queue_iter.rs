use core::iter::FusedIterator;

/// Iterator over the elements of a [`RingQueue`](super::RingQueue), oldest first.
pub struct RingQueueIter<'a, T> {
  slots:     &'a [Option<T>],
  cursor:    usize,
  remaining: usize,
}

impl<'a, T> RingQueueIter<'a, T> {
  pub(crate) const fn new(slots: &'a [Option<T>], cursor: usize, remaining: usize) -> Self {
    Self { slots, cursor, remaining }
  }
}

impl<'a, T> Iterator for RingQueueIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let item = self.slots[self.cursor].as_ref();
    self.cursor = (self.cursor + 1) % self.slots.len();
    self.remaining -= 1;
    item
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for RingQueueIter<'_, T> {}

impl<T> FusedIterator for RingQueueIter<'_, T> {}
