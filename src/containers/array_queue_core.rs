use crate::{ContainerError, ContainerResult, Elem, OpCost};

/// Core implementation of the naive shifting array-backed queue.
///
/// The logical front is pinned at index 0, so every dequeue shifts all
/// remaining elements one slot left to restore that layout. This is the
/// deliberate inefficiency the container exists to demonstrate: a dequeue
/// at size `n` always reports `n - 1` moved elements, regardless of how
/// the queue got there. [`CircularQueueCore`](super::CircularQueueCore)
/// offers the same FIFO contract without the shift.
///
/// # Behavior
///
/// - `enqueue` writes at index `size` and doubles when full, reporting the
///   resize copy count exactly like the stack
/// - `dequeue` captures index 0 and shifts `[1, size)` left, reporting
///   `moved = size - 1` (measured before the size decrement)
/// - `total_copies` accumulates resize copies only; per-dequeue shift
///   costs are reported per call and never accumulated
///
/// # Example
///
/// ```rust
/// use array_cost_core::containers::ArrayQueueCore;
/// use array_cost_core::OpCost;
///
/// let mut queue = ArrayQueueCore::new();
/// for v in 0..4 {
///     queue.enqueue(v).unwrap();
/// }
///
/// // Dequeue at size 4 shifts the 3 survivors left.
/// assert_eq!(queue.dequeue(), Ok((0, OpCost { copied: 0, moved: 3 })));
/// assert_eq!(queue.to_vec(), vec![1, 2, 3]);
/// ```
pub struct ArrayQueueCore {
    /// Number of allocated slots; always >= 1
    capacity: usize,
    /// Number of stored elements; front is always index 0
    size: usize,
    /// Running sum of resize copy costs (shift costs excluded)
    total_copies: usize,
    /// Backing storage of length `capacity`, exclusively owned
    data: Box<[Elem]>,
}

impl ArrayQueueCore {
    /// Creates an empty queue with capacity 1.
    pub fn new() -> Self {
        ArrayQueueCore {
            capacity: 1,
            size: 0,
            total_copies: 0,
            data: vec![0; 1].into_boxed_slice(),
        }
    }

    /// Returns the number of stored elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the current capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true when no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the running sum of resize copy costs.
    ///
    /// Dequeue shift costs are deliberately excluded, so this counter
    /// isolates the amortized growth cost from the per-operation shift
    /// cost.
    #[inline]
    pub fn total_copies(&self) -> usize {
        self.total_copies
    }

    /// Replaces the backing block with one of `new_capacity` slots and
    /// returns the number of copied elements.
    fn resize(&mut self, new_capacity: usize) -> ContainerResult<usize> {
        if new_capacity < self.size || new_capacity < 1 {
            return Err(ContainerError::InvalidCapacity {
                requested: new_capacity,
                size: self.size,
            });
        }

        let mut new_data = vec![0; new_capacity].into_boxed_slice();
        let mut copied = 0;
        for i in 0..self.size {
            new_data[i] = self.data[i];
            copied += 1;
        }
        self.data = new_data;
        self.capacity = new_capacity;
        self.total_copies += copied;
        Ok(copied)
    }

    /// Ensures capacity for one more enqueue; returns the resize copy count.
    fn ensure_capacity_for_one_more(&mut self) -> ContainerResult<usize> {
        if self.size < self.capacity {
            return Ok(0);
        }
        self.resize(self.capacity * 2)
    }

    /// Adds `value` at the rear (amortized O(1)).
    ///
    /// Growth follows the same doubling rule as the stack. Enqueue never
    /// shifts, so `moved` is always 0.
    ///
    /// # Returns
    /// * `Ok(OpCost { copied, moved: 0 })` - Resize copy count for this call
    pub fn enqueue(&mut self, value: Elem) -> ContainerResult<OpCost> {
        let copied = self.ensure_capacity_for_one_more()?;
        self.data[self.size] = value;
        self.size += 1;
        Ok(OpCost::resize(copied))
    }

    /// Returns the front value without removing it (O(1)).
    ///
    /// # Returns
    /// * `Ok(value)` - Copy of the front element
    /// * `Err(ContainerError::Underflow)` - If the queue is empty
    pub fn peek(&self) -> ContainerResult<Elem> {
        if self.size == 0 {
            return Err(ContainerError::Underflow);
        }
        Ok(self.data[0])
    }

    /// Removes and returns the front value (O(n) due to shifting).
    ///
    /// Captures the value at index 0, then shifts `[1, size)` one slot
    /// left so the new front lands at index 0 again. Exactly `size - 1`
    /// elements move, measured before the size decrement.
    ///
    /// # Returns
    /// * `Ok((value, OpCost { copied: 0, moved }))` - Front value and shift cost
    /// * `Err(ContainerError::Underflow)` - If the queue is empty
    pub fn dequeue(&mut self) -> ContainerResult<(Elem, OpCost)> {
        if self.size == 0 {
            return Err(ContainerError::Underflow);
        }

        let value = self.data[0];
        // Shifting left moves (size - 1) elements.
        let moved = self.size - 1;
        for i in 0..self.size - 1 {
            self.data[i] = self.data[i + 1];
        }
        self.size -= 1;
        Ok((value, OpCost::shift(moved)))
    }

    /// Returns an independent copy of the used portion in front-to-rear
    /// order.
    pub fn to_vec(&self) -> Vec<Elem> {
        self.data[..self.size].to_vec()
    }
}

impl Default for ArrayQueueCore {
    fn default() -> Self {
        Self::new()
    }
}
