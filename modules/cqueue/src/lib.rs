#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::from_over_into)]
#![no_std]

//! Bounded circular queues.
//!
//! Two interchangeable backends implement the same [`CircularQueue`] contract:
//!
//! - [`RingBufferQueue`] keeps its elements in a fixed slot array addressed with modular index arithmetic and shifts
//!   whichever side of an `insert`/`remove` position is shorter.
//! - [`CircularListQueue`] keeps a circular singly-linked chain referenced only through its back node. Nodes are
//!   allocated on insertion and freed on removal.
//!
//! [`AnyCircularQueue`] selects one of them at runtime from a [`CircularQueueConfig`], and
//! [`SharedCircularQueue`] wraps any backend in a spin lock for callers that share a queue across threads.

extern crate alloc;

mod any_circular_queue;
mod circular_list_iter;
mod circular_list_queue;
mod circular_queue;
mod circular_queue_config;
mod insert_position;
mod list_node;
mod offer_outcome;
mod overflow_policy;
mod queue_backend_kind;
mod queue_error;
mod ring_buffer_iter;
mod ring_buffer_queue;
mod shared_circular_queue;

pub use any_circular_queue::{AnyCircularQueue, AnyCircularQueueIter};
pub use circular_list_iter::CircularListIter;
pub use circular_list_queue::CircularListQueue;
pub use circular_queue::CircularQueue;
pub use circular_queue_config::CircularQueueConfig;
pub use offer_outcome::OfferOutcome;
pub use overflow_policy::OverflowPolicy;
pub use queue_backend_kind::QueueBackendKind;
pub use queue_error::QueueError;
pub use ring_buffer_iter::RingBufferIter;
pub use ring_buffer_queue::RingBufferQueue;
pub use shared_circular_queue::SharedCircularQueue;
