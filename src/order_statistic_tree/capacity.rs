use super::OrderStatisticTree;
use crate::raw::RawOrderStatisticTree;

impl<T> OrderStatisticTree<T> {
    /// Creates an empty sequence with room for at least `capacity` elements before
    /// its node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::OrderStatisticTree;
    ///
    /// let seq: OrderStatisticTree<i32> = OrderStatisticTree::with_capacity(32);
    /// assert!(seq.is_empty());
    /// assert!(seq.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderStatisticTree {
            raw: RawOrderStatisticTree::with_capacity(capacity),
        }
    }

    /// Returns how many elements the node storage holds without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
