use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use crate::list_node::ListNode;

/// Borrowing iterator over a [`crate::CircularListQueue`], from front to back.
///
/// The walk stops after `len` hops instead of watching for the front node to come around again.
pub struct CircularListIter<'a, T> {
  next:      Option<NonNull<ListNode<T>>>,
  remaining: usize,
  _marker:   PhantomData<&'a ListNode<T>>,
}

// SAFETY: the iterator only hands out shared references into the chain.
unsafe impl<T: Sync> Send for CircularListIter<'_, T> {}
// SAFETY: as above.
unsafe impl<T: Sync> Sync for CircularListIter<'_, T> {}

impl<T> CircularListIter<'_, T> {
  pub(crate) const fn new(front: Option<NonNull<ListNode<T>>>, len: usize) -> Self {
    Self { next: front, remaining: len, _marker: PhantomData }
  }
}

impl<'a, T> Iterator for CircularListIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let node = self.next?;
    // SAFETY: the queue outlives `'a` and cannot be mutated while this borrow exists.
    let node_ref: &'a ListNode<T> = unsafe { node.as_ref() };
    self.next = Some(node_ref.next);
    self.remaining -= 1;
    Some(&node_ref.value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for CircularListIter<'_, T> {}

impl<T> FusedIterator for CircularListIter<'_, T> {}

impl<T> Clone for CircularListIter<'_, T> {
  fn clone(&self) -> Self {
    Self { next: self.next, remaining: self.remaining, _marker: PhantomData }
  }
}
