#[cfg(test)]
mod tests;

/// Clamps a caller-supplied insert index into the logical range `0..=len`.
#[must_use]
pub(crate) fn clamp_insert_position(index: isize, len: usize) -> usize {
  match usize::try_from(index) {
    | Ok(position) => position.min(len),
    | Err(_) => 0,
  }
}
