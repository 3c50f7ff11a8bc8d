
use core::fmt;

/// Errors that occur during circular queue operations.
///
/// A failed operation never mutates the queue: the element handed in by the caller is returned through
/// [`QueueError::Full`] and every other variant is raised before any slot or node is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// The queue has no elements to read or remove.
  Empty,
  /// The queue is full and rejected the element. Contains the element that was attempted to be added.
  Full(T),
  /// No stored element compares equal to the requested value.
  NotFound,
  /// The requested capacity is below the minimum of one slot.
  InvalidCapacity {
    /// Capacity that was requested.
    requested: usize,
  },
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by variants that preserve the element on failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) => Some(item),
      | Self::Empty | Self::NotFound | Self::InvalidCapacity { .. } => None,
    }
  }

  /// Indicates whether the error was caused by an empty queue.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    matches!(self, Self::Empty)
  }

  /// Indicates whether the error was caused by a full queue.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    matches!(self, Self::Full(_))
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | QueueError::Empty => write!(f, "queue is empty"),
      | QueueError::Full(_) => write!(f, "queue is full"),
      | QueueError::NotFound => write!(f, "queue does not contain the requested element"),
      | QueueError::InvalidCapacity { requested } => {
        write!(f, "queue capacity must be at least 1 (requested {requested})")
      },
    }
  }
}

impl<T: fmt::Debug> core::error::Error for QueueError<T> {}
