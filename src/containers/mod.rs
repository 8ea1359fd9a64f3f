//! Core container implementations.
//!
//! This module contains the four array-backed containers. Each container is
//! an independent type with its own bookkeeping; there is no shared trait or
//! base implementation, because their cost contracts (shift vs. no-shift
//! dequeue) are semantically different rather than polymorphic variants of
//! one concept.
//!
//! # Available Containers
//!
//! - **[`FixedArrayCore`]** - Fixed capacity with explicit shifting on insert/remove
//! - **[`ArrayStackCore`]** - Doubling dynamic array with LIFO push/pop
//! - **[`ArrayQueueCore`]** - Naive FIFO queue, dequeue shifts every remaining element
//! - **[`CircularQueueCore`]** - Ring-buffer FIFO queue, dequeue relocates nothing
//!
//! # Cost Comparison
//!
//! | Container | Insert | Remove | Growth | Demonstrates |
//! |-----------|--------|--------|--------|--------------|
//! | FixedArray | O(n) shift | O(n) shift | none | Shift cost of contiguous layout |
//! | ArrayStack | amortized O(1) | O(1) | doubling | Amortized resize cost |
//! | ArrayQueue | amortized O(1) | O(n) shift | doubling | Cost of a fixed front index |
//! | CircularQueue | amortized O(1) | O(1) | doubling | Head pointer removes the shift |
//!
//! # Shared Growth Rule
//!
//! The three growable containers start at capacity 1 and double exactly when
//! an insertion finds `size == capacity`. A resize copies the used portion
//! into a fresh block and reports the copy count as that operation's cost;
//! an insertion with free capacity costs 0 copies.

pub mod fixed_array_core;
pub use fixed_array_core::FixedArrayCore;

pub mod array_stack_core;
pub use array_stack_core::ArrayStackCore;

pub mod array_queue_core;
pub use array_queue_core::ArrayQueueCore;

pub mod circular_queue_core;
pub use circular_queue_core::CircularQueueCore;
