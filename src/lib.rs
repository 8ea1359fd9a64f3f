//! Array-backed linear containers with observable operation cost.
//!
//! This library provides a small family of array-backed containers built to
//! make the *cost* of each operation observable, not just its result. Every
//! mutating operation returns the exact number of element copies or shifts
//! it performed, so that growth strategy (doubling) and layout strategy
//! (linear vs. circular) can be compared empirically.
//!
//! # Quick Start
//!
//! ```rust
//! use array_cost_core::containers::ArrayStackCore;
//!
//! // Create an empty stack with capacity 1.
//! let mut stack = ArrayStackCore::new();
//!
//! // Each push reports how many elements a resize copied (0 if none).
//! match stack.push(42) {
//!     Ok(copied) => println!("Pushed, resize copied {} element(s)", copied),
//!     Err(e) => println!("Push failed: {}", e),
//! }
//! ```
//!
//! # Available Containers
//!
//! ## [FixedArray](containers::FixedArrayCore)
//! Fixed capacity, no growth; insert/remove shift elements and report the
//! shift count, making the O(n) cost visible:
//! ```rust
//! # use array_cost_core::containers::FixedArrayCore;
//! let mut arr = FixedArrayCore::new(8); // capacity fixed at 8
//! ```
//!
//! ## [ArrayStack](containers::ArrayStackCore)
//! Doubling dynamic array with LIFO push/pop; the baseline for
//! amortized-cost reasoning:
//! ```rust
//! # use array_cost_core::containers::ArrayStackCore;
//! let mut stack = ArrayStackCore::new(); // capacity starts at 1
//! ```
//!
//! ## [ArrayQueue](containers::ArrayQueueCore)
//! Naive FIFO queue whose dequeue shifts every remaining element left;
//! demonstrates the cost of ignoring a head pointer:
//! ```rust
//! # use array_cost_core::containers::ArrayQueueCore;
//! let mut queue = ArrayQueueCore::new(); // dequeue at size n moves n-1
//! ```
//!
//! ## [CircularQueue](containers::CircularQueueCore)
//! Ring-buffer FIFO queue with a head index computed modulo capacity;
//! dequeue relocates nothing:
//! ```rust
//! # use array_cost_core::containers::CircularQueueCore;
//! let mut queue = CircularQueueCore::new(); // dequeue always moves 0
//! ```
//!
//! # Core Concepts
//!
//! ## Cost Reporting
//! Growth copies and shift moves are reported separately. The growable
//! containers accumulate resize copies into a lifetime
//! `total_copies` counter; shift costs are reported per call only, so that
//! amortized resize cost and per-operation shift cost stay distinguishable.
//!
//! ## Error Handling
//! All fallible operations return [`ContainerResult`] which can indicate:
//! - **[`IndexOutOfBounds`](ContainerError::IndexOutOfBounds)** - Bad index
//! - **[`Underflow`](ContainerError::Underflow)** - Empty container
//! - **[`Overflow`](ContainerError::Overflow)** - Fixed capacity exhausted
//! - **[`InvalidCapacity`](ContainerError::InvalidCapacity)** - Bad resize target
//!
//! Every check runs before any mutation, so failed operations leave the
//! container untouched.
//!
//! ## Ownership
//! Each container exclusively owns its backing storage and is mutated
//! through `&mut self` by a single caller. Read accessors return copies,
//! never aliases into the storage.
//!
//! # Container Selection Guide
//!
//! Choose your container based on your requirements:
//!
//! - **Fixed memory, indexed access**: Use [`FixedArrayCore`](containers::FixedArrayCore)
//! - **LIFO order**: Use [`ArrayStackCore`](containers::ArrayStackCore)
//! - **FIFO order, simplest code**: Use [`ArrayQueueCore`](containers::ArrayQueueCore)
//! - **FIFO order, O(1) dequeue**: Use [`CircularQueueCore`](containers::CircularQueueCore)

pub mod analysis;
pub mod containers;
pub mod error;
pub mod types;

pub use error::{ContainerError, ContainerResult};
pub use types::{Elem, OpCost};
