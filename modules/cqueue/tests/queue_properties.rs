use cqueue_rs::{AnyCircularQueue, CircularQueue, OfferOutcome, QueueBackendKind, QueueError};

const BACKENDS: [QueueBackendKind; 2] = [QueueBackendKind::RingBuffer, QueueBackendKind::CircularList];

fn queue_of(kind: QueueBackendKind, capacity: usize, items: impl IntoIterator<Item = i32>) -> AnyCircularQueue<i32> {
  let mut queue = AnyCircularQueue::new(kind, capacity).unwrap();
  for item in items {
    queue.push(item).unwrap();
  }
  queue
}

#[test]
fn pops_in_push_order() {
  for kind in BACKENDS {
    let mut queue = queue_of(kind, 4, [10, 20, 30]);
    assert_eq!(queue.pop(), Ok(10));
    assert_eq!(queue.pop(), Ok(20));
    assert_eq!(queue.pop(), Ok(30));
    assert_eq!(queue.pop(), Err(QueueError::Empty));
  }
}

#[test]
fn wraps_around_many_times_without_losing_order() {
  for kind in BACKENDS {
    let mut queue = AnyCircularQueue::new(kind, 5).unwrap();
    let mut popped = Vec::new();
    for item in 0..20 {
      if queue.is_full() {
        popped.push(queue.pop().unwrap());
      }
      queue.push(item).unwrap();
      assert!(queue.len() <= queue.capacity());
    }
    popped.extend(queue.drain_to_vec());
    assert_eq!(popped, (0..20).collect::<Vec<_>>());
  }
}

#[test]
fn rejects_push_when_full() {
  for kind in BACKENDS {
    let mut queue = queue_of(kind, 2, [1, 2]);
    assert_eq!(queue.push(3), Err(QueueError::Full(3)));
    assert_eq!(queue.insert(0, 4), Err(QueueError::Full(4)));
    assert_eq!(queue.to_vec(), vec![1, 2]);
  }
}

#[test]
fn replace_on_full_drops_oldest() {
  for kind in BACKENDS {
    let mut queue = queue_of(kind, 3, [1, 2, 3]);
    assert_eq!(queue.push_replace(4), Ok(OfferOutcome::DroppedOldest { count: 1 }));
    assert_eq!(queue.to_vec(), vec![2, 3, 4]);
    assert_eq!(queue.front(), Ok(&2));
    assert_eq!(queue.back(), Ok(&4));
  }
}

#[test]
fn shrinking_keeps_newest_elements() {
  for kind in BACKENDS {
    let mut queue = queue_of(kind, 10, 1..=7);
    queue.resize(2).unwrap();
    assert_eq!(queue.to_vec(), vec![6, 7]);
    assert_eq!(queue.capacity(), 2);
    assert!(queue.is_full());
  }
}

#[test]
fn growing_keeps_every_element() {
  for kind in BACKENDS {
    let mut queue = queue_of(kind, 3, [1, 2, 3]);
    queue.resize(5).unwrap();
    queue.push(4).unwrap();
    assert_eq!(queue.to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(queue.resize(0), Err(QueueError::InvalidCapacity { requested: 0 }));
    assert_eq!(queue.capacity(), 5);
  }
}

#[test]
fn insert_clamps_out_of_range_indices() {
  for kind in BACKENDS {
    let mut queue = queue_of(kind, 6, [2, 3]);
    queue.insert(-100, 1).unwrap();
    queue.insert(isize::MAX, 5).unwrap();
    queue.insert(3, 4).unwrap();
    queue.insert(isize::MIN, 0).unwrap();
    assert_eq!(queue.to_vec(), vec![0, 1, 2, 3, 4, 5]);
  }
}

#[test]
fn remove_takes_first_match_only() {
  for kind in BACKENDS {
    let mut queue = queue_of(kind, 5, [1, 2, 1, 3]);
    assert_eq!(queue.remove(&1), Ok(1));
    assert_eq!(queue.to_vec(), vec![2, 1, 3]);
    assert_eq!(queue.remove(&4), Err(QueueError::NotFound));
    queue.clear();
    assert_eq!(queue.remove(&1), Err(QueueError::Empty));
  }
}

#[test]
fn snapshot_matches_drained_sequence() {
  for kind in BACKENDS {
    let mut queue = queue_of(kind, 4, [4, 3]);
    queue.push_replace(2).unwrap();
    queue.insert(1, 9).unwrap();
    let snapshot = queue.to_vec();
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), snapshot);
    assert_eq!(queue.drain_to_vec(), snapshot);
    assert!(queue.is_empty());
  }
}

#[test]
fn empty_queue_reports_empty_errors() {
  for kind in BACKENDS {
    let mut queue = AnyCircularQueue::<i32>::new(kind, 1).unwrap();
    assert_eq!(queue.front(), Err(QueueError::Empty));
    assert_eq!(queue.back(), Err(QueueError::Empty));
    assert_eq!(queue.pop(), Err(QueueError::Empty));
    assert!(queue.drain_to_vec().is_empty());
  }
}
