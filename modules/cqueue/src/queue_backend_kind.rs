/// Storage strategy selected when a queue is built from a configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QueueBackendKind {
  /// Fixed slot array addressed with modular index arithmetic.
  #[default]
  RingBuffer,
  /// Circular singly-linked chain with nodes allocated on demand.
  CircularList,
}

impl From<&QueueBackendKind> for &'static str {
  fn from(kind: &QueueBackendKind) -> Self {
    match kind {
      | QueueBackendKind::RingBuffer => "ring_buffer",
      | QueueBackendKind::CircularList => "circular_list",
    }
  }
}
