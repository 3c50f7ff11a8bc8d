use core::iter::FusedIterator;

/// Borrowing iterator over a [`crate::RingBufferQueue`], from front to back.
pub struct RingBufferIter<'a, T> {
  slots:     &'a [Option<T>],
  head:      usize,
  next:      usize,
  remaining: usize,
}

impl<'a, T> RingBufferIter<'a, T> {
  pub(crate) const fn new(slots: &'a [Option<T>], head: usize, len: usize) -> Self {
    Self { slots, head, next: 0, remaining: len }
  }
}

impl<'a, T> Iterator for RingBufferIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let index = (self.head + self.next) % self.slots.len();
    self.next += 1;
    self.remaining -= 1;
    self.slots[index].as_ref()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for RingBufferIter<'_, T> {}

impl<T> FusedIterator for RingBufferIter<'_, T> {}

impl<T> Clone for RingBufferIter<'_, T> {
  fn clone(&self) -> Self {
    Self { slots: self.slots, head: self.head, next: self.next, remaining: self.remaining }
  }
}
