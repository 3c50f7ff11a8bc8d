use super::clamp_insert_position;

#[test]
fn negative_index_clamps_to_front() {
  assert_eq!(clamp_insert_position(-3, 2), 0);
  assert_eq!(clamp_insert_position(isize::MIN, 5), 0);
}

#[test]
fn index_past_back_clamps_to_len() {
  assert_eq!(clamp_insert_position(231, 2), 2);
  assert_eq!(clamp_insert_position(isize::MAX, 0), 0);
}

#[test]
fn index_within_range_is_kept() {
  assert_eq!(clamp_insert_position(0, 3), 0);
  assert_eq!(clamp_insert_position(1, 3), 1);
  assert_eq!(clamp_insert_position(3, 3), 3);
}
