use alloc::vec::Vec;

use crate::{OfferOutcome, OverflowPolicy, QueueError};

/// Bounded FIFO contract shared by every circular queue backend.
///
/// Elements form the logical sequence `e[0]..e[len-1]` where `e[0]` is the front (oldest) and `e[len-1]` the back
/// (newest). `0 <= len() <= capacity()` and `capacity() >= 1` hold after every call, and a failed call leaves the
/// queue untouched.
pub trait CircularQueue<T> {
  /// Borrowing iterator walking the queue from front to back.
  type Iter<'a>: Iterator<Item = &'a T>
  where
    Self: 'a,
    T: 'a;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Returns the maximum number of elements the queue holds.
  fn capacity(&self) -> usize;

  /// Returns a reference to the front (oldest) element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  fn front(&self) -> Result<&T, QueueError<T>>;

  /// Returns a reference to the back (newest) element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  fn back(&self) -> Result<&T, QueueError<T>>;

  /// Appends an element at the back, applying `policy` when the queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] carrying the element when the queue is full and `policy` is
  /// [`OverflowPolicy::Reject`].
  fn offer(&mut self, item: T, policy: OverflowPolicy) -> Result<OfferOutcome, QueueError<T>>;

  /// Removes and returns the front element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  fn pop(&mut self) -> Result<T, QueueError<T>>;

  /// Inserts an element so that it becomes `e[clamp(index, 0, len)]`.
  ///
  /// Negative indices address the front and indices past the back address the back.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] carrying the element when the queue is full.
  fn insert(&mut self, index: isize, item: T) -> Result<(), QueueError<T>>;

  /// Removes the first element equal to `item`, scanning from front to back, and returns it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements and [`QueueError::NotFound`] when no element
  /// compares equal.
  fn remove(&mut self, item: &T) -> Result<T, QueueError<T>>
  where
    T: PartialEq;

  /// Changes the capacity, discarding the oldest elements that no longer fit.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when `new_capacity` is zero.
  fn resize(&mut self, new_capacity: usize) -> Result<(), QueueError<T>>;

  /// Drops every stored element.
  fn clear(&mut self);

  /// Returns an iterator over the elements from front to back.
  fn iter(&self) -> Self::Iter<'_>;

  /// Indicates whether the queue is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the queue is full.
  fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }

  /// Appends an element at the back, rejecting it when the queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] carrying the element when the queue is full.
  fn push(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    self.offer(item, OverflowPolicy::Reject)
  }

  /// Appends an element at the back, evicting the front element first when the queue is full.
  ///
  /// # Errors
  ///
  /// Never fails for a queue whose capacity is at least one; the signature matches [`CircularQueue::offer`].
  fn push_replace(&mut self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    self.offer(item, OverflowPolicy::ReplaceOldest)
  }

  /// Returns a snapshot of the elements from front to back.
  fn to_vec(&self) -> Vec<T>
  where
    T: Clone, {
    self.iter().cloned().collect()
  }

  /// Pops every element and returns them in removal order.
  fn drain_to_vec(&mut self) -> Vec<T> {
    let mut drained = Vec::with_capacity(self.len());
    while let Ok(item) = self.pop() {
      drained.push(item);
    }
    drained
  }
}
