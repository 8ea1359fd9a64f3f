//! Deterministic cost simulations over the containers.
//!
//! These helpers drive a fresh container through a fixed workload and
//! summarize the observed growth and shift costs, so doubling growth and
//! linear-vs-circular layout can be compared empirically. Rendering the
//! results (tables, CLI) is left to the caller.

use crate::containers::{ArrayQueueCore, ArrayStackCore, CircularQueueCore};
use crate::{ContainerResult, Elem, OpCost};

/// Summary of the growth costs observed while filling a container.
///
/// `total_actual_cost` counts one write per operation plus every resize
/// copy, which is the quantity whose per-operation average stays bounded
/// under doubling growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthSummary {
    /// Number of insert operations performed.
    pub operations: usize,
    /// Container size after the workload.
    pub final_size: usize,
    /// Container capacity after the workload.
    pub final_capacity: usize,
    /// Lifetime resize copies accumulated by the container.
    pub total_copies: usize,
    /// Sum over all operations of (1 write + resize copies).
    pub total_actual_cost: usize,
    /// Largest resize copy count observed in a single operation.
    pub max_copied_in_one_op: usize,
}

/// Pushes `0..m` into a fresh stack and summarizes the growth costs.
///
/// # Example
///
/// ```rust
/// use array_cost_core::analysis::simulate_pushes;
///
/// let summary = simulate_pushes(5).unwrap();
/// assert_eq!(summary.final_capacity, 8);
/// assert_eq!(summary.total_copies, 7);
/// assert_eq!(summary.max_copied_in_one_op, 4);
/// ```
pub fn simulate_pushes(m: usize) -> ContainerResult<GrowthSummary> {
    let mut stack = ArrayStackCore::new();
    let mut total_actual_cost = 0;
    let mut max_copied = 0;
    for i in 0..m {
        let copied = stack.push(i as Elem)?;
        total_actual_cost += 1 + copied;
        max_copied = max_copied.max(copied);
    }
    Ok(GrowthSummary {
        operations: m,
        final_size: stack.size(),
        final_capacity: stack.capacity(),
        total_copies: stack.total_copies(),
        total_actual_cost,
        max_copied_in_one_op: max_copied,
    })
}

/// Enqueues `0..m` into a fresh naive queue and summarizes the growth
/// costs.
pub fn simulate_enqueues(m: usize) -> ContainerResult<GrowthSummary> {
    let mut queue = ArrayQueueCore::new();
    let mut total_actual_cost = 0;
    let mut max_copied = 0;
    for i in 0..m {
        let cost = queue.enqueue(i as Elem)?;
        total_actual_cost += 1 + cost.copied;
        max_copied = max_copied.max(cost.copied);
    }
    Ok(GrowthSummary {
        operations: m,
        final_size: queue.size(),
        final_capacity: queue.capacity(),
        total_copies: queue.total_copies(),
        total_actual_cost,
        max_copied_in_one_op: max_copied,
    })
}

/// Enqueues `0..m` into a fresh circular queue and summarizes the growth
/// costs.
///
/// With no intervening dequeues the head never moves, so the summary
/// matches [`simulate_enqueues`] exactly; the layouts only diverge once
/// removals enter the workload.
pub fn simulate_circular_enqueues(m: usize) -> ContainerResult<GrowthSummary> {
    let mut queue = CircularQueueCore::new();
    let mut total_actual_cost = 0;
    let mut max_copied = 0;
    for i in 0..m {
        let cost = queue.enqueue(i as Elem)?;
        total_actual_cost += 1 + cost.copied;
        max_copied = max_copied.max(cost.copied);
    }
    Ok(GrowthSummary {
        operations: m,
        final_size: queue.size(),
        final_capacity: queue.capacity(),
        total_copies: queue.total_copies(),
        total_actual_cost,
        max_copied_in_one_op: max_copied,
    })
}

/// Builds a circular queue holding `0..n` in order.
pub fn build_ordered_circular_queue(n: usize) -> ContainerResult<CircularQueueCore> {
    let mut queue = CircularQueueCore::new();
    for v in 0..n {
        queue.enqueue(v as Elem)?;
    }
    Ok(queue)
}

/// Builds a naive queue of size `n`, dequeues once, and returns the cost.
///
/// Requires `n >= 1`; the shift cost is always `n - 1` moved elements.
pub fn naive_dequeue_cost_at_size(n: usize) -> ContainerResult<OpCost> {
    let mut queue = ArrayQueueCore::new();
    for v in 0..n {
        queue.enqueue(v as Elem)?;
    }
    let (_, cost) = queue.dequeue()?;
    Ok(cost)
}

/// Builds a circular queue of size `n`, dequeues once, and returns the
/// cost.
///
/// Requires `n >= 1`; the cost is always zero copies and zero moves.
pub fn circular_dequeue_cost_at_size(n: usize) -> ContainerResult<OpCost> {
    let mut queue = build_ordered_circular_queue(n)?;
    let (_, cost) = queue.dequeue()?;
    Ok(cost)
}
