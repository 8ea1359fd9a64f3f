use crate::{ContainerError, ContainerResult, Elem, OpCost};

/// Core implementation of the circular (ring-buffer) array-backed queue.
///
/// The logical front lives at a movable `head` index; logical position `i`
/// maps to physical index `(head + i) % capacity`. Dequeue advances the
/// head instead of shifting, so it relocates nothing and always reports
/// `moved = 0` — the improvement over
/// [`ArrayQueueCore`](super::ArrayQueueCore), which pays `size - 1` moves
/// per dequeue for the same FIFO contract.
///
/// # Behavior
///
/// - `enqueue` writes at physical index `(head + size) % capacity` and
///   doubles when full; the resize linearizes: elements are copied in
///   logical front-to-back order into `[0, size)` of the new block and
///   `head` resets to 0
/// - `dequeue` captures the element at `head`, advances
///   `head = (head + 1) % capacity`, and never moves anything
/// - `to_vec` re-linearizes on read without mutating the head
/// - `total_copies` accumulates resize copies only
///
/// # Example
///
/// ```rust
/// use array_cost_core::containers::CircularQueueCore;
/// use array_cost_core::OpCost;
///
/// let mut queue = CircularQueueCore::new();
/// for v in 0..4 {
///     queue.enqueue(v).unwrap();
/// }
/// queue.dequeue().unwrap();
/// queue.dequeue().unwrap();
///
/// // These writes wrap past the end of the 4-slot block.
/// queue.enqueue(4).unwrap();
/// queue.enqueue(5).unwrap();
/// assert_eq!(queue.to_vec(), vec![2, 3, 4, 5]);
///
/// // A resize while head != 0 still copies exactly `size` elements.
/// assert_eq!(queue.enqueue(6), Ok(OpCost { copied: 4, moved: 0 }));
/// assert_eq!(queue.to_vec(), vec![2, 3, 4, 5, 6]);
/// ```
pub struct CircularQueueCore {
    /// Number of allocated slots; always >= 1
    capacity: usize,
    /// Number of stored elements
    size: usize,
    /// Physical index of the logical front; irrelevant when size is 0
    head: usize,
    /// Running sum of resize copy costs
    total_copies: usize,
    /// Backing storage of length `capacity`, exclusively owned
    data: Box<[Elem]>,
}

impl CircularQueueCore {
    /// Creates an empty queue with capacity 1.
    pub fn new() -> Self {
        CircularQueueCore {
            capacity: 1,
            size: 0,
            head: 0,
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
    #[inline]
    pub fn total_copies(&self) -> usize {
        self.total_copies
    }

    /// Maps a logical offset in `[0, size)` to its physical index.
    ///
    /// Single source of truth for the wraparound arithmetic; enqueue,
    /// resize, and `to_vec` all go through here so they cannot drift out
    /// of sync.
    #[inline]
    fn index_at(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity
    }

    /// Replaces the backing block with one of `new_capacity` slots,
    /// linearizing the elements, and returns the number of copied elements.
    ///
    /// Elements are copied in logical front-to-back order into `[0, size)`
    /// of the new block, dereferencing wrapped source indices through
    /// [`Self::index_at`], and `head` resets to 0.
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
            new_data[i] = self.data[self.index_at(i)];
            copied += 1;
        }
        self.data = new_data;
        self.capacity = new_capacity;
        self.head = 0;
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
    /// After any needed resize, the value is written at physical index
    /// `(head + size) % capacity`, which wraps to a low physical index
    /// once `head + size >= capacity`.
    ///
    /// # Returns
    /// * `Ok(OpCost { copied, moved: 0 })` - Resize copy count for this call
    pub fn enqueue(&mut self, value: Elem) -> ContainerResult<OpCost> {
        let copied = self.ensure_capacity_for_one_more()?;
        let tail = self.index_at(self.size);
        self.data[tail] = value;
        self.size += 1;
        Ok(OpCost::resize(copied))
    }

    /// Returns the front value without removing it (O(1)).
    ///
    /// # Returns
    /// * `Ok(value)` - Copy of the element at the head
    /// * `Err(ContainerError::Underflow)` - If the queue is empty
    pub fn peek(&self) -> ContainerResult<Elem> {
        if self.size == 0 {
            return Err(ContainerError::Underflow);
        }
        Ok(self.data[self.head])
    }

    /// Removes and returns the front value (O(1); no shifting).
    ///
    /// Advances the head modulo capacity instead of relocating elements,
    /// so `moved` is 0 for any size and any history of prior wraparounds.
    /// The head is normalized back to 0 when the queue empties.
    ///
    /// # Returns
    /// * `Ok((value, OpCost { copied: 0, moved: 0 }))` - Front value, zero cost
    /// * `Err(ContainerError::Underflow)` - If the queue is empty
    pub fn dequeue(&mut self) -> ContainerResult<(Elem, OpCost)> {
        if self.size == 0 {
            return Err(ContainerError::Underflow);
        }

        let value = self.data[self.head];
        self.head = (self.head + 1) % self.capacity;
        self.size -= 1;
        if self.size == 0 {
            // Deterministic state when empty; head is irrelevant at size 0.
            self.head = 0;
        }
        Ok((value, OpCost::FREE))
    }

    /// Returns an independent copy of the elements in logical
    /// front-to-back order, regardless of physical wraparound.
    pub fn to_vec(&self) -> Vec<Elem> {
        (0..self.size).map(|i| self.data[self.index_at(i)]).collect()
    }
}

impl Default for CircularQueueCore {
    fn default() -> Self {
        Self::new()
    }
}
