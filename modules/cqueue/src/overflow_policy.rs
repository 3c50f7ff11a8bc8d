/// Policy describing how a full queue handles an offered element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
  /// Reject the offered element and hand it back through [`crate::QueueError::Full`].
  #[default]
  Reject,
  /// Evict exactly one element from the front, then append the offered element.
  ReplaceOldest,
}
