use crate::{ContainerError, ContainerResult, Elem};

/// Core implementation of a doubling array-backed stack.
///
/// The stack stores its elements contiguously with the top at index
/// `size - 1`. Capacity starts at 1 and doubles exactly when a push finds
/// the block full, so the sequence of resize copy costs is deterministic:
/// pushes 1, 2, 3, 4, 5 into a fresh stack cost `0, 1, 2, 0, 4` copies.
/// This is the baseline container for amortized-cost reasoning.
///
/// # Behavior
///
/// - `push` reports the resize copy count (0 when free capacity exists)
/// - `pop` and `peek` are O(1) and never resize; capacity never shrinks
/// - A resize copies the used portion into a fresh block and atomically
///   replaces the old one
/// - `total_copies` accumulates every resize copy over the stack's lifetime
///
/// # Example
///
/// ```rust
/// use array_cost_core::containers::ArrayStackCore;
///
/// let mut stack = ArrayStackCore::new();
///
/// // Doubling from capacity 1: costs 0, 1, 2, 0, 4.
/// assert_eq!(stack.push(0), Ok(0));
/// assert_eq!(stack.push(1), Ok(1));
/// assert_eq!(stack.push(2), Ok(2));
/// assert_eq!(stack.push(3), Ok(0));
/// assert_eq!(stack.push(4), Ok(4));
///
/// assert_eq!(stack.size(), 5);
/// assert_eq!(stack.capacity(), 8);
/// assert_eq!(stack.total_copies(), 7);
/// assert_eq!(stack.pop(), Ok(4));
/// ```
pub struct ArrayStackCore {
    /// Number of allocated slots; always >= 1
    capacity: usize,
    /// Number of stored elements; top lives at index `size - 1`
    size: usize,
    /// Running sum of resize copy costs across the stack's lifetime
    total_copies: usize,
    /// Backing storage of length `capacity`, exclusively owned
    data: Box<[Elem]>,
}

impl ArrayStackCore {
    /// Creates an empty stack with capacity 1.
    ///
    /// Starting at capacity 1 keeps the doubling sequence deterministic:
    /// the k-th push (1-indexed) triggers a resize exactly when k is a
    /// power of two.
    pub fn new() -> Self {
        ArrayStackCore {
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

    /// Returns the running sum of all resize copy costs.
    #[inline]
    pub fn total_copies(&self) -> usize {
        self.total_copies
    }

    /// Replaces the backing block with one of `new_capacity` slots and
    /// returns the number of copied elements.
    ///
    /// The used portion is copied in order; the old block is discarded in
    /// full once the swap happens, so no partial aliasing survives.
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

    /// Ensures capacity for one more push; returns the resize copy count.
    fn ensure_capacity_for_one_more(&mut self) -> ContainerResult<usize> {
        if self.size < self.capacity {
            return Ok(0);
        }
        self.resize(self.capacity * 2)
    }

    /// Pushes `value` onto the top and returns the resize copy count
    /// (amortized O(1)).
    ///
    /// If the stack is full, capacity doubles first and all `size`
    /// existing elements are copied into the new block; that copy count is
    /// the reported cost. With free capacity the cost is 0.
    ///
    /// # Returns
    /// * `Ok(copied)` - Number of elements a resize copied (0 if none)
    pub fn push(&mut self, value: Elem) -> ContainerResult<usize> {
        let copied = self.ensure_capacity_for_one_more()?;
        self.data[self.size] = value;
        self.size += 1;
        Ok(copied)
    }

    /// Returns the top value without removing it (O(1)).
    ///
    /// # Returns
    /// * `Ok(value)` - Copy of the top element
    /// * `Err(ContainerError::Underflow)` - If the stack is empty
    pub fn peek(&self) -> ContainerResult<Elem> {
        if self.size == 0 {
            return Err(ContainerError::Underflow);
        }
        Ok(self.data[self.size - 1])
    }

    /// Removes and returns the top value (O(1); no shrinking).
    ///
    /// # Returns
    /// * `Ok(value)` - The removed top element
    /// * `Err(ContainerError::Underflow)` - If the stack is empty
    pub fn pop(&mut self) -> ContainerResult<Elem> {
        if self.size == 0 {
            return Err(ContainerError::Underflow);
        }
        self.size -= 1;
        Ok(self.data[self.size])
    }

    /// Returns an independent copy of the used portion in bottom-to-top
    /// order.
    pub fn to_vec(&self) -> Vec<Elem> {
        self.data[..self.size].to_vec()
    }
}

impl Default for ArrayStackCore {
    fn default() -> Self {
        Self::new()
    }
}
