
use core::fmt;

use crate::{
  CircularListIter, CircularListQueue, CircularQueue, CircularQueueConfig, OfferOutcome, OverflowPolicy,
  QueueBackendKind, QueueError, RingBufferIter, RingBufferQueue,
};

/// Circular queue whose backend is chosen at construction time.
pub enum AnyCircularQueue<T> {
  /// Ring buffer backend.
  RingBuffer(RingBufferQueue<T>),
  /// Circular singly-linked list backend.
  CircularList(CircularListQueue<T>),
}

/// Iterator over an [`AnyCircularQueue`], from front to back.
pub enum AnyCircularQueueIter<'a, T> {
  /// Iterator over a ring buffer backend.
  RingBuffer(RingBufferIter<'a, T>),
  /// Iterator over a circular list backend.
  CircularList(CircularListIter<'a, T>),
}

impl<T> AnyCircularQueue<T> {
  /// Creates an empty queue of the requested backend.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when `capacity` is zero.
  pub fn new(kind: QueueBackendKind, capacity: usize) -> Result<Self, QueueError<T>> {
    match kind {
      | QueueBackendKind::RingBuffer => RingBufferQueue::new(capacity).map(Self::RingBuffer),
      | QueueBackendKind::CircularList => CircularListQueue::new(capacity).map(Self::CircularList),
    }
  }

  /// Creates an empty queue from a configuration.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when the configured capacity is zero.
  pub fn from_config(config: &CircularQueueConfig) -> Result<Self, QueueError<T>> {
    config.build()
  }

  /// Returns the backend in use.
  #[must_use]
  pub const fn backend_kind(&self) -> QueueBackendKind {
    match self {
      | Self::RingBuffer(_) => QueueBackendKind::RingBuffer,
      | Self::CircularList(_) => QueueBackendKind::CircularList,
    }
  }
}

impl<T> CircularQueue<T> for AnyCircularQueue<T> {
  type Iter<'a>
    = AnyCircularQueueIter<'a, T>
  where
    T: 'a;

  fn len(&self) -> usize {
    match self {
      | Self::RingBuffer(queue) => queue.len(),
      | Self::CircularList(queue) => queue.len(),
    }
  }

  fn capacity(&self) -> usize {
    match self {
      | Self::RingBuffer(queue) => queue.capacity(),
      | Self::CircularList(queue) => queue.capacity(),
    }
  }

  fn front(&self) -> Result<&T, QueueError<T>> {
    match self {
      | Self::RingBuffer(queue) => queue.front(),
      | Self::CircularList(queue) => queue.front(),
    }
  }

  fn back(&self) -> Result<&T, QueueError<T>> {
    match self {
      | Self::RingBuffer(queue) => queue.back(),
      | Self::CircularList(queue) => queue.back(),
    }
  }

  fn offer(&mut self, item: T, policy: OverflowPolicy) -> Result<OfferOutcome, QueueError<T>> {
    match self {
      | Self::RingBuffer(queue) => queue.offer(item, policy),
      | Self::CircularList(queue) => queue.offer(item, policy),
    }
  }

  fn pop(&mut self) -> Result<T, QueueError<T>> {
    match self {
      | Self::RingBuffer(queue) => queue.pop(),
      | Self::CircularList(queue) => queue.pop(),
    }
  }

  fn insert(&mut self, index: isize, item: T) -> Result<(), QueueError<T>> {
    match self {
      | Self::RingBuffer(queue) => queue.insert(index, item),
      | Self::CircularList(queue) => queue.insert(index, item),
    }
  }

  fn remove(&mut self, item: &T) -> Result<T, QueueError<T>>
  where
    T: PartialEq, {
    match self {
      | Self::RingBuffer(queue) => queue.remove(item),
      | Self::CircularList(queue) => queue.remove(item),
    }
  }

  fn resize(&mut self, new_capacity: usize) -> Result<(), QueueError<T>> {
    match self {
      | Self::RingBuffer(queue) => queue.resize(new_capacity),
      | Self::CircularList(queue) => queue.resize(new_capacity),
    }
  }

  fn clear(&mut self) {
    match self {
      | Self::RingBuffer(queue) => queue.clear(),
      | Self::CircularList(queue) => queue.clear(),
    }
  }

  fn iter(&self) -> Self::Iter<'_> {
    match self {
      | Self::RingBuffer(queue) => AnyCircularQueueIter::RingBuffer(queue.iter()),
      | Self::CircularList(queue) => AnyCircularQueueIter::CircularList(queue.iter()),
    }
  }
}

impl<'a, T> Iterator for AnyCircularQueueIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    match self {
      | Self::RingBuffer(iter) => iter.next(),
      | Self::CircularList(iter) => iter.next(),
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    match self {
      | Self::RingBuffer(iter) => iter.size_hint(),
      | Self::CircularList(iter) => iter.size_hint(),
    }
  }
}

impl<T> ExactSizeIterator for AnyCircularQueueIter<'_, T> {}

impl<'a, T> IntoIterator for &'a AnyCircularQueue<T> {
  type IntoIter = AnyCircularQueueIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T: Clone> Clone for AnyCircularQueue<T> {
  fn clone(&self) -> Self {
    match self {
      | Self::RingBuffer(queue) => Self::RingBuffer(queue.clone()),
      | Self::CircularList(queue) => Self::CircularList(queue.clone()),
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for AnyCircularQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::RingBuffer(queue) => fmt::Debug::fmt(queue, f),
      | Self::CircularList(queue) => fmt::Debug::fmt(queue, f),
    }
  }
}
