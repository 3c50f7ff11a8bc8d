
use alloc::vec::Vec;
use core::fmt;

use crate::{
  CircularQueue, OfferOutcome, OverflowPolicy, QueueError, RingBufferIter, insert_position::clamp_insert_position,
};

/// Circular queue backed by a fixed slot array.
///
/// The live span starts at `head` and covers `len` slots, wrapping past the end of the array. Slots outside the span
/// are always `None`. Positional `insert` and `remove` move whichever side of the target position holds fewer
/// elements, so their cost is `O(min(p, len - p))`.
pub struct RingBufferQueue<T> {
  slots: Vec<Option<T>>,
  head:  usize,
  len:   usize,
}

impl<T> RingBufferQueue<T> {
  /// Creates an empty queue holding at most `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when `capacity` is zero.
  pub fn new(capacity: usize) -> Result<Self, QueueError<T>> {
    if capacity == 0 {
      return Err(QueueError::InvalidCapacity { requested: capacity });
    }
    Ok(Self { slots: Self::empty_slots(capacity), head: 0, len: 0 })
  }

  fn empty_slots(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
  }

  /// Maps a logical position onto its slot index.
  fn physical(&self, logical: usize) -> usize {
    (self.head + logical) % self.slots.len()
  }

  fn retreat(&self, index: usize) -> usize {
    (index + self.slots.len() - 1) % self.slots.len()
  }

  fn take_front(&mut self) -> Option<T> {
    let item = self.slots[self.head].take()?;
    self.len -= 1;
    self.head = if self.len == 0 { 0 } else { self.physical(1) };
    Some(item)
  }

  fn append(&mut self, item: T) {
    debug_assert!(self.len < self.slots.len());
    let index = self.physical(self.len);
    self.slots[index] = Some(item);
    self.len += 1;
  }

  /// Opens a gap at logical `position` by moving the shorter side one slot outward.
  fn open_gap(&mut self, position: usize) -> usize {
    if position < self.len - position {
      self.head = self.retreat(self.head);
      for logical in 0..position {
        let (dst, src) = (self.physical(logical), self.physical(logical + 1));
        self.slots.swap(dst, src);
      }
    } else {
      for logical in (position..self.len).rev() {
        let (dst, src) = (self.physical(logical + 1), self.physical(logical));
        self.slots.swap(dst, src);
      }
    }
    self.physical(position)
  }

  /// Closes the gap left at logical `position` by moving the shorter side one slot inward.
  fn close_gap(&mut self, position: usize) {
    let last = self.len - 1;
    if position < last - position {
      for logical in (0..position).rev() {
        let (dst, src) = (self.physical(logical + 1), self.physical(logical));
        self.slots.swap(dst, src);
      }
      self.head = self.physical(1);
    } else {
      for logical in position + 1..self.len {
        let (dst, src) = (self.physical(logical - 1), self.physical(logical));
        self.slots.swap(dst, src);
      }
    }
    self.len -= 1;
    if self.len == 0 {
      self.head = 0;
    }
  }
}

impl<T> CircularQueue<T> for RingBufferQueue<T> {
  type Iter<'a>
    = RingBufferIter<'a, T>
  where
    T: 'a;

  fn len(&self) -> usize {
    self.len
  }

  fn capacity(&self) -> usize {
    self.slots.len()
  }

  fn front(&self) -> Result<&T, QueueError<T>> {
    if self.len == 0 {
      return Err(QueueError::Empty);
    }
    self.slots[self.head].as_ref().ok_or(QueueError::Empty)
  }

  fn back(&self) -> Result<&T, QueueError<T>> {
    if self.len == 0 {
      return Err(QueueError::Empty);
    }
    self.slots[self.physical(self.len - 1)].as_ref().ok_or(QueueError::Empty)
  }

  fn offer(&mut self, item: T, policy: OverflowPolicy) -> Result<OfferOutcome, QueueError<T>> {
    if !self.is_full() {
      self.append(item);
      return Ok(OfferOutcome::Enqueued);
    }

    match policy {
      | OverflowPolicy::Reject => Err(QueueError::Full(item)),
      | OverflowPolicy::ReplaceOldest => {
        drop(self.take_front());
        self.append(item);
        let outcome = OfferOutcome::DroppedOldest { count: 1 };
        tracing::trace!(
          capacity = self.slots.len(),
          outcome = <&'static str>::from(&outcome),
          "ring buffer evicted front element"
        );
        Ok(outcome)
      },
    }
  }

  fn pop(&mut self) -> Result<T, QueueError<T>> {
    self.take_front().ok_or(QueueError::Empty)
  }

  fn insert(&mut self, index: isize, item: T) -> Result<(), QueueError<T>> {
    if self.is_full() {
      return Err(QueueError::Full(item));
    }
    let position = clamp_insert_position(index, self.len);
    let slot = self.open_gap(position);
    self.slots[slot] = Some(item);
    self.len += 1;
    Ok(())
  }

  fn remove(&mut self, item: &T) -> Result<T, QueueError<T>>
  where
    T: PartialEq, {
    if self.len == 0 {
      return Err(QueueError::Empty);
    }
    let position = self.iter().position(|candidate| candidate == item).ok_or(QueueError::NotFound)?;
    let slot = self.physical(position);
    let removed = self.slots[slot].take().ok_or(QueueError::NotFound)?;
    self.close_gap(position);
    Ok(removed)
  }

  fn resize(&mut self, new_capacity: usize) -> Result<(), QueueError<T>> {
    if new_capacity == 0 {
      return Err(QueueError::InvalidCapacity { requested: new_capacity });
    }

    let discarded = self.len.saturating_sub(new_capacity);
    let mut slots = Vec::with_capacity(new_capacity);
    for logical in 0..self.len {
      let index = self.physical(logical);
      let item = self.slots[index].take();
      if logical >= discarded {
        slots.push(item);
      }
    }
    slots.resize_with(new_capacity, || None);

    if discarded > 0 {
      tracing::debug!(discarded, capacity = new_capacity, "ring buffer shrank below its length");
    }
    self.slots = slots;
    self.head = 0;
    self.len -= discarded;
    Ok(())
  }

  fn clear(&mut self) {
    self.slots.iter_mut().for_each(|slot| *slot = None);
    self.head = 0;
    self.len = 0;
  }

  fn iter(&self) -> Self::Iter<'_> {
    RingBufferIter::new(&self.slots, self.head, self.len)
  }
}

impl<'a, T> IntoIterator for &'a RingBufferQueue<T> {
  type IntoIter = RingBufferIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T: Clone> Clone for RingBufferQueue<T> {
  fn clone(&self) -> Self {
    Self { slots: self.slots.clone(), head: self.head, len: self.len }
  }
}

impl<T: fmt::Debug> fmt::Debug for RingBufferQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "RingBufferQueue(")?;
    f.debug_list().entries(self.iter()).finish()?;
    write!(f, ", capacity={})", self.slots.len())
  }
}
