
use alloc::boxed::Box;
use core::{fmt, marker::PhantomData, ptr::NonNull};

use crate::{
  CircularListIter, CircularQueue, OfferOutcome, OverflowPolicy, QueueError, insert_position::clamp_insert_position,
  list_node::ListNode,
};

/// Circular queue backed by a circular singly-linked chain without a sentinel node.
///
/// Only the back node is referenced directly; the front node is its successor. Nodes are allocated when an element
/// enters the queue and released when it leaves, so the capacity is a logical ceiling rather than a reservation.
/// Positional `insert` walks forward from the back node and costs `O(p)`.
pub struct CircularListQueue<T> {
  back:     Option<NonNull<ListNode<T>>>,
  len:      usize,
  capacity: usize,
  _owns:    PhantomData<Box<ListNode<T>>>,
}

// SAFETY: the queue exclusively owns every node of its chain, like a `Box<T>` would.
unsafe impl<T: Send> Send for CircularListQueue<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for CircularListQueue<T> {}

impl<T> CircularListQueue<T> {
  /// Creates an empty queue holding at most `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when `capacity` is zero.
  pub fn new(capacity: usize) -> Result<Self, QueueError<T>> {
    if capacity == 0 {
      return Err(QueueError::InvalidCapacity { requested: capacity });
    }
    Ok(Self::empty(capacity))
  }

  const fn empty(capacity: usize) -> Self {
    Self { back: None, len: 0, capacity, _owns: PhantomData }
  }

  fn front_node(&self) -> Option<NonNull<ListNode<T>>> {
    // SAFETY: `back` always points at a live node of the chain owned by `self`.
    self.back.map(|back| unsafe { back.as_ref().next })
  }

  /// Splices `node` between `pred` and its current successor.
  ///
  /// # Safety
  ///
  /// `pred` must be a live node of this chain and `node` a freshly allocated node that belongs to no chain.
  unsafe fn link_after(mut pred: NonNull<ListNode<T>>, mut node: NonNull<ListNode<T>>) {
    // SAFETY: both pointers are live and distinct per the caller's contract.
    unsafe {
      node.as_mut().next = pred.as_ref().next;
      pred.as_mut().next = node;
    }
  }

  fn link_back(&mut self, item: T) {
    let node = ListNode::allocate(item);
    if let Some(back) = self.back {
      // SAFETY: `back` is live and `node` was just allocated.
      unsafe { Self::link_after(back, node) };
    }
    self.back = Some(node);
    self.len += 1;
  }

  fn unlink_front(&mut self) -> Option<T> {
    let mut back = self.back?;
    // SAFETY: `back` is live, so is its successor.
    let front = unsafe { back.as_ref().next };
    if front == back {
      self.back = None;
    } else {
      // SAFETY: `front` and `back` are distinct live nodes.
      unsafe { back.as_mut().next = front.as_ref().next };
    }
    self.len -= 1;
    // SAFETY: `front` is no longer reachable from the chain.
    Some(unsafe { ListNode::release(front) })
  }
}

impl<T> CircularQueue<T> for CircularListQueue<T> {
  type Iter<'a>
    = CircularListIter<'a, T>
  where
    T: 'a;

  fn len(&self) -> usize {
    self.len
  }

  fn capacity(&self) -> usize {
    self.capacity
  }

  fn front(&self) -> Result<&T, QueueError<T>> {
    let node = self.front_node().ok_or(QueueError::Empty)?;
    // SAFETY: the node stays alive until the next mutating call, which needs `&mut self`.
    Ok(unsafe { &node.as_ref().value })
  }

  fn back(&self) -> Result<&T, QueueError<T>> {
    let node = self.back.ok_or(QueueError::Empty)?;
    // SAFETY: see `front`.
    Ok(unsafe { &node.as_ref().value })
  }

  fn offer(&mut self, item: T, policy: OverflowPolicy) -> Result<OfferOutcome, QueueError<T>> {
    if !self.is_full() {
      self.link_back(item);
      return Ok(OfferOutcome::Enqueued);
    }

    match policy {
      | OverflowPolicy::Reject => Err(QueueError::Full(item)),
      | OverflowPolicy::ReplaceOldest => {
        drop(self.unlink_front());
        self.link_back(item);
        let outcome = OfferOutcome::DroppedOldest { count: 1 };
        tracing::trace!(
          capacity = self.capacity,
          outcome = <&'static str>::from(&outcome),
          "circular list evicted front element"
        );
        Ok(outcome)
      },
    }
  }

  fn pop(&mut self) -> Result<T, QueueError<T>> {
    self.unlink_front().ok_or(QueueError::Empty)
  }

  fn insert(&mut self, index: isize, item: T) -> Result<(), QueueError<T>> {
    if self.is_full() {
      return Err(QueueError::Full(item));
    }
    let position = clamp_insert_position(index, self.len);
    let Some(back) = self.back.filter(|_| position < self.len) else {
      self.link_back(item);
      return Ok(());
    };

    let mut pred = back;
    for _ in 0..position {
      // SAFETY: every node reached from `back` within `len` hops is live.
      pred = unsafe { pred.as_ref().next };
    }
    let node = ListNode::allocate(item);
    // SAFETY: `pred` is live and `node` was just allocated.
    unsafe { Self::link_after(pred, node) };
    self.len += 1;
    Ok(())
  }

  fn remove(&mut self, item: &T) -> Result<T, QueueError<T>>
  where
    T: PartialEq, {
    let back = self.back.ok_or(QueueError::Empty)?;
    let mut pred = back;
    // SAFETY: `back` is live, so is its successor.
    let mut current = unsafe { back.as_ref().next };

    for _ in 0..self.len {
      // SAFETY: `current` is a live node of the chain.
      let current_ref = unsafe { current.as_ref() };
      if current_ref.value == *item {
        if current == pred {
          self.back = None;
        } else {
          // SAFETY: `pred` and `current` are distinct live nodes.
          unsafe { pred.as_mut().next = current_ref.next };
          if current == back {
            self.back = Some(pred);
          }
        }
        self.len -= 1;
        // SAFETY: `current` is no longer reachable from the chain.
        return Ok(unsafe { ListNode::release(current) });
      }
      pred = current;
      current = current_ref.next;
    }

    Err(QueueError::NotFound)
  }

  fn resize(&mut self, new_capacity: usize) -> Result<(), QueueError<T>> {
    if new_capacity == 0 {
      return Err(QueueError::InvalidCapacity { requested: new_capacity });
    }

    let discarded = self.len.saturating_sub(new_capacity);
    for _ in 0..discarded {
      drop(self.unlink_front());
    }
    if discarded > 0 {
      tracing::debug!(discarded, capacity = new_capacity, "circular list shrank below its length");
    }
    self.capacity = new_capacity;
    Ok(())
  }

  fn clear(&mut self) {
    while self.unlink_front().is_some() {}
  }

  fn iter(&self) -> Self::Iter<'_> {
    CircularListIter::new(self.front_node(), self.len)
  }
}

impl<T> Drop for CircularListQueue<T> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<'a, T> IntoIterator for &'a CircularListQueue<T> {
  type IntoIter = CircularListIter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T: Clone> Clone for CircularListQueue<T> {
  fn clone(&self) -> Self {
    let mut cloned = Self::empty(self.capacity);
    for item in self.iter() {
      cloned.link_back(item.clone());
    }
    cloned
  }
}

impl<T: fmt::Debug> fmt::Debug for CircularListQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "CircularListQueue(")?;
    f.debug_list().entries(self.iter()).finish()?;
    write!(f, ", capacity={})", self.capacity)
  }
}
