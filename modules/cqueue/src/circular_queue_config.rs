//! Construction settings for circular queues.


use crate::{AnyCircularQueue, OverflowPolicy, QueueBackendKind, QueueError};

/// Capacity, backend and default overflow policy used to build a queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircularQueueConfig {
  capacity:        usize,
  backend:         QueueBackendKind,
  overflow_policy: OverflowPolicy,
}

impl CircularQueueConfig {
  /// Creates a configuration for a ring buffer queue that rejects elements when full.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { capacity, backend: QueueBackendKind::RingBuffer, overflow_policy: OverflowPolicy::Reject }
  }

  /// Selects the storage backend.
  #[must_use]
  pub const fn with_backend(mut self, backend: QueueBackendKind) -> Self {
    self.backend = backend;
    self
  }

  /// Selects the policy applied by [`crate::SharedCircularQueue::offer`].
  #[must_use]
  pub const fn with_overflow_policy(mut self, overflow_policy: OverflowPolicy) -> Self {
    self.overflow_policy = overflow_policy;
    self
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the configured backend.
  #[must_use]
  pub const fn backend(&self) -> QueueBackendKind {
    self.backend
  }

  /// Returns the configured overflow policy.
  #[must_use]
  pub const fn overflow_policy(&self) -> OverflowPolicy {
    self.overflow_policy
  }

  /// Builds an empty queue of the configured backend.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidCapacity`] when the configured capacity is zero.
  pub fn build<T>(&self) -> Result<AnyCircularQueue<T>, QueueError<T>> {
    AnyCircularQueue::new(self.backend, self.capacity)
  }
}
