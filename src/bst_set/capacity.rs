use super::BstSet;
use crate::order::Natural;
use crate::raw::RawBst;

impl<T> BstSet<T> {
    /// Creates an empty set whose node arena has room for at least
    /// `capacity` elements.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_tree::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BstSet {
            raw: RawBst::with_capacity(capacity),
            order: Natural,
        }
    }
}

impl<T, C> BstSet<T, C> {
    /// Returns the number of elements the node arena can hold without
    /// reallocating.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_tree::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::with_capacity(32);
    /// assert!(set.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
