
use alloc::{sync::Arc, vec::Vec};
use core::marker::PhantomData;

use spin::Mutex;

use crate::{AnyCircularQueue, CircularQueue, CircularQueueConfig, OfferOutcome, OverflowPolicy, QueueError};

/// Cloneable handle that serialises every operation on a queue behind one spin lock.
///
/// The lock is held for the whole operation, so paired index updates and multi-node relinking are never observed
/// half done. References cannot outlive the lock, which is why [`SharedCircularQueue::front`] and
/// [`SharedCircularQueue::back`] return clones.
pub struct SharedCircularQueue<T, Q = AnyCircularQueue<T>>
where
  Q: CircularQueue<T>, {
  inner:  Arc<Mutex<Q>>,
  policy: OverflowPolicy,
  _pd:    PhantomData<fn() -> T>,
}

impl<T> SharedCircularQueue<T> {
  /// Builds the configured backend and wraps it, applying the configured overflow policy on [`Self::offer`].
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when the configured capacity is zero.
  pub fn from_config(config: &CircularQueueConfig) -> Result<Self, QueueError<T>> {
    let queue = config.build()?;
    tracing::trace!(
      backend = <&'static str>::from(&config.backend()),
      capacity = config.capacity(),
      "shared circular queue created"
    );
    Ok(Self::new(queue, config.overflow_policy()))
  }
}

impl<T, Q> SharedCircularQueue<T, Q>
where
  Q: CircularQueue<T>,
{
  /// Wraps an existing queue.
  #[must_use]
  pub fn new(queue: Q, policy: OverflowPolicy) -> Self {
    Self { inner: Arc::new(Mutex::new(queue)), policy, _pd: PhantomData }
  }

  /// Returns the policy applied by [`Self::offer`].
  #[must_use]
  pub const fn overflow_policy(&self) -> OverflowPolicy {
    self.policy
  }

  /// Runs `f` against the locked queue.
  pub fn with_lock<R>(&self, f: impl FnOnce(&mut Q) -> R) -> R {
    let mut guard = self.inner.lock();
    f(&mut guard)
  }

  /// Appends an element according to the handle's overflow policy.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] when the queue is full and the policy rejects the element.
  pub fn offer(&self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    let policy = self.policy;
    self.with_lock(|queue| queue.offer(item, policy))
  }

  /// Appends an element, rejecting it when the queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] when the queue is full.
  pub fn push(&self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    self.with_lock(|queue| queue.push(item))
  }

  /// Appends an element, evicting the front element when the queue is full.
  ///
  /// # Errors
  ///
  /// Never fails for a queue whose capacity is at least one.
  pub fn push_replace(&self, item: T) -> Result<OfferOutcome, QueueError<T>> {
    self.with_lock(|queue| queue.push_replace(item))
  }

  /// Removes and returns the front element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn pop(&self) -> Result<T, QueueError<T>> {
    self.with_lock(|queue| queue.pop())
  }

  /// Inserts an element at the clamped logical position.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] when the queue is full.
  pub fn insert(&self, index: isize, item: T) -> Result<(), QueueError<T>> {
    self.with_lock(|queue| queue.insert(index, item))
  }

  /// Removes the first element equal to `item`.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] or [`QueueError::NotFound`].
  pub fn remove(&self, item: &T) -> Result<T, QueueError<T>>
  where
    T: PartialEq, {
    self.with_lock(|queue| queue.remove(item))
  }

  /// Changes the capacity, discarding the oldest elements that no longer fit.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when `new_capacity` is zero.
  pub fn resize(&self, new_capacity: usize) -> Result<(), QueueError<T>> {
    self.with_lock(|queue| queue.resize(new_capacity))
  }

  /// Drops every stored element.
  pub fn clear(&self) {
    self.with_lock(|queue| queue.clear());
  }

  /// Returns a clone of the front element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn front(&self) -> Result<T, QueueError<T>>
  where
    T: Clone, {
    self.with_lock(|queue| queue.front().cloned())
  }

  /// Returns a clone of the back element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn back(&self) -> Result<T, QueueError<T>>
  where
    T: Clone, {
    self.with_lock(|queue| queue.back().cloned())
  }

  /// Returns the current number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.with_lock(|queue| queue.len())
  }

  /// Returns the capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.with_lock(|queue| queue.capacity())
  }

  /// Indicates whether the queue is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.with_lock(|queue| queue.is_empty())
  }

  /// Indicates whether the queue is full.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.with_lock(|queue| queue.is_full())
  }

  /// Returns a snapshot of the elements from front to back.
  #[must_use]
  pub fn to_vec(&self) -> Vec<T>
  where
    T: Clone, {
    self.with_lock(|queue| queue.to_vec())
  }

  /// Pops every element under a single lock acquisition.
  #[must_use]
  pub fn drain_to_vec(&self) -> Vec<T> {
    self.with_lock(|queue| queue.drain_to_vec())
  }
}

impl<T, Q> Clone for SharedCircularQueue<T, Q>
where
  Q: CircularQueue<T>,
{
  fn clone(&self) -> Self {
    Self { inner: Arc::clone(&self.inner), policy: self.policy, _pd: PhantomData }
  }
}
