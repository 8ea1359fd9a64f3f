use crate::{ContainerError, ContainerResult, Elem};

/// Core implementation of a bounds-checked fixed-capacity array.
///
/// The fixed array owns a contiguous block whose length never changes after
/// construction. Insertion and removal keep the used portion `[0, size)`
/// contiguous by shifting elements, and each shifting operation returns the
/// exact number of elements it moved. This is the substrate that makes the
/// O(n) cost of contiguous-layout insertion and removal visible.
///
/// # Behavior
///
/// - The array starts empty; `capacity` is fixed at construction (0 allowed)
/// - `insert_at` shifts `[index, size)` one slot right and reports
///   `size - index` moved elements
/// - `remove_at` shifts `[index + 1, size)` one slot left and reports
///   `size - index - 1` moved elements
/// - Insertion into a full array fails with [`ContainerError::Overflow`];
///   there is no growth path
///
/// # Example
///
/// ```rust
/// use array_cost_core::containers::FixedArrayCore;
///
/// let mut arr = FixedArrayCore::new(4);
/// arr.append(10).unwrap();
/// arr.append(30).unwrap();
///
/// // Inserting at the front of 2 elements moves both of them.
/// assert_eq!(arr.insert_at(0, 5), Ok(2));
/// assert_eq!(arr.to_vec(), vec![5, 10, 30]);
///
/// // Removing the front moves the 2 survivors back left.
/// assert_eq!(arr.remove_at(0), Ok((5, 2)));
/// ```
pub struct FixedArrayCore {
    /// Fixed number of slots allocated at construction
    capacity: usize,
    /// Number of valid elements; `[0, size)` is the used portion
    size: usize,
    /// Backing storage of length `capacity`, exclusively owned
    data: Box<[Elem]>,
}

impl FixedArrayCore {
    /// Creates an empty fixed array with the given capacity.
    ///
    /// A capacity of 0 is allowed; every insertion into such an array
    /// fails with [`ContainerError::Overflow`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_cost_core::containers::FixedArrayCore;
    ///
    /// let arr = FixedArrayCore::new(8);
    /// assert_eq!(arr.capacity(), 8);
    /// assert_eq!(arr.size(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        FixedArrayCore {
            capacity,
            size: 0,
            data: vec![0; capacity].into_boxed_slice(),
        }
    }

    /// Returns the number of stored elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true when no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Validates an access index in `[0, size)`.
    fn require_index_in_range(&self, index: usize) -> ContainerResult<()> {
        if index >= self.size {
            return Err(ContainerError::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Validates an insertion index in `[0, size]`.
    fn require_insert_index_in_range(&self, index: usize) -> ContainerResult<()> {
        if index > self.size {
            return Err(ContainerError::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Ensures at least one free slot remains.
    fn require_not_full(&self) -> ContainerResult<()> {
        if self.size >= self.capacity {
            return Err(ContainerError::Overflow {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Returns the element at `index` (O(1)).
    ///
    /// # Returns
    /// * `Ok(value)` - Copy of the stored element
    /// * `Err(ContainerError::IndexOutOfBounds)` - If `index >= size`
    pub fn get(&self, index: usize) -> ContainerResult<Elem> {
        self.require_index_in_range(index)?;
        Ok(self.data[index])
    }

    /// Overwrites the element at `index` (O(1)).
    ///
    /// # Returns
    /// * `Ok(())` - The slot was overwritten
    /// * `Err(ContainerError::IndexOutOfBounds)` - If `index >= size`
    pub fn set(&mut self, index: usize, value: Elem) -> ContainerResult<()> {
        self.require_index_in_range(index)?;
        self.data[index] = value;
        Ok(())
    }

    /// Returns the index of the first element equal to `value`, or `None`
    /// if no element matches (O(n) linear scan).
    pub fn index_of(&self, value: Elem) -> Option<usize> {
        (0..self.size).find(|&i| self.data[i] == value)
    }

    /// Appends `value` at the end and returns the moved count.
    ///
    /// Equivalent to `insert_at(size, value)`, so the moved count is
    /// always 0 on success.
    ///
    /// # Returns
    /// * `Ok(0)` - The value was appended
    /// * `Err(ContainerError::Overflow)` - If the array is full
    pub fn append(&mut self, value: Elem) -> ContainerResult<usize> {
        self.insert_at(self.size, value)
    }

    /// Inserts `value` at `index`, shifting `[index, size)` one slot right,
    /// and returns the number of shifted elements.
    ///
    /// The shift runs highest index first so no element is overwritten
    /// before it is moved. Exactly `size - index` elements move, measured
    /// before the size increment: inserting at the front of `n` elements
    /// moves all `n`, appending moves none.
    ///
    /// # Returns
    /// * `Ok(moved)` - Number of elements shifted right
    /// * `Err(ContainerError::Overflow)` - If the array is full (checked first)
    /// * `Err(ContainerError::IndexOutOfBounds)` - If `index > size`
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_cost_core::containers::FixedArrayCore;
    ///
    /// let mut arr = FixedArrayCore::new(4);
    /// assert_eq!(arr.insert_at(0, 1), Ok(0)); // empty: nothing moves
    /// assert_eq!(arr.insert_at(0, 2), Ok(1)); // front: 1 element moves
    /// assert_eq!(arr.insert_at(2, 3), Ok(0)); // end: nothing moves
    /// assert_eq!(arr.to_vec(), vec![2, 1, 3]);
    /// ```
    pub fn insert_at(&mut self, index: usize, value: Elem) -> ContainerResult<usize> {
        self.require_not_full()?;
        self.require_insert_index_in_range(index)?;

        // Shifting right moves exactly (size - index) elements.
        let moved = self.size - index;
        let mut i = self.size;
        while i > index {
            self.data[i] = self.data[i - 1];
            i -= 1;
        }
        self.data[index] = value;
        self.size += 1;
        Ok(moved)
    }

    /// Removes the element at `index`, shifting `[index + 1, size)` one
    /// slot left, and returns the removed value with the shifted count.
    ///
    /// Exactly `size - index - 1` elements move, measured before the size
    /// decrement: removing the front of `n` elements moves `n - 1`,
    /// removing the last element moves none.
    ///
    /// # Returns
    /// * `Ok((value, moved))` - Removed value and number of elements shifted left
    /// * `Err(ContainerError::IndexOutOfBounds)` - If `index >= size`
    pub fn remove_at(&mut self, index: usize) -> ContainerResult<(Elem, usize)> {
        self.require_index_in_range(index)?;

        let removed = self.data[index];
        // Shifting left moves exactly (size - index - 1) elements.
        let moved = self.size - index - 1;
        for i in index..self.size - 1 {
            self.data[i] = self.data[i + 1];
        }
        self.size -= 1;
        Ok((removed, moved))
    }

    /// Returns an independent copy of the used portion `[0, size)` in
    /// front-to-back order.
    pub fn to_vec(&self) -> Vec<Elem> {
        self.data[..self.size].to_vec()
    }
}
