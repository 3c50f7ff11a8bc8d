use super::OfferOutcome;

#[test]
fn offer_outcome_enqueued_label() {
  let outcome = OfferOutcome::Enqueued;
  let desc: &str = (&outcome).into();
  assert_eq!(desc, "enqueue");
}

#[test]
fn offer_outcome_dropped_oldest_label() {
  let outcome = OfferOutcome::DroppedOldest { count: 1 };
  let OfferOutcome::DroppedOldest { count } = outcome else {
    panic!("expected DroppedOldest variant");
  };
  assert_eq!(count, 1);
  let desc: &str = (&outcome).into();
  assert_eq!(desc, "drop_oldest");
}

#[test]
fn offer_outcome_partial_eq() {
  assert_eq!(OfferOutcome::Enqueued, OfferOutcome::Enqueued);
  assert_ne!(OfferOutcome::Enqueued, OfferOutcome::DroppedOldest { count: 1 });
  assert_ne!(OfferOutcome::DroppedOldest { count: 1 }, OfferOutcome::DroppedOldest { count: 2 });
}
