use alloc::boxed::Box;
use core::ptr::NonNull;

/// Heap node of a [`crate::CircularListQueue`] chain.
pub(crate) struct ListNode<T> {
  pub(crate) value: T,
  pub(crate) next:  NonNull<ListNode<T>>,
}

impl<T> ListNode<T> {
  /// Allocates a node whose successor is itself.
  pub(crate) fn allocate(value: T) -> NonNull<Self> {
    let node = Box::new(Self { value, next: NonNull::dangling() });
    let mut ptr = NonNull::from(Box::leak(node));
    // SAFETY: `ptr` was just leaked from a live `Box` and nothing else refers to it.
    unsafe { ptr.as_mut().next = ptr };
    ptr
  }

  /// Reclaims a node previously produced by [`ListNode::allocate`] and returns its value.
  ///
  /// # Safety
  ///
  /// `ptr` must come from [`ListNode::allocate`], must already be unlinked from every chain, and must not be
  /// released twice.
  pub(crate) unsafe fn release(ptr: NonNull<Self>) -> T {
    // SAFETY: the caller guarantees unique ownership of a node allocated through `Box`.
    let node = unsafe { Box::from_raw(ptr.as_ptr()) };
    node.value
  }
}
