#[cfg(test)]
mod tests;

/// Outcome produced by a successful offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferOutcome {
  /// The element was appended without any side effects.
  Enqueued,
  /// The element was appended after evicting the oldest items.
  DroppedOldest {
    /// Number of elements removed from the front of the queue.
    count: usize,
  },
}

impl From<&OfferOutcome> for &'static str {
  fn from(outcome: &OfferOutcome) -> Self {
    match outcome {
      | OfferOutcome::Enqueued => "enqueue",
      | OfferOutcome::DroppedOldest { .. } => "drop_oldest",
    }
  }
}
