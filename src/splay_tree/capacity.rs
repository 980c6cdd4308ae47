use super::SplayTree;
use crate::raw::RawSplayTree;

impl<T> SplayTree<T> {
    /// Creates an empty tree with room for at least `capacity` values before its
    /// node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<i32> = SplayTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SplayTree {
            raw: RawSplayTree::with_capacity(capacity),
        }
    }

    /// Returns how many values the node storage holds without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Moves the values into node storage sized to fit them, releasing the slots
    /// left behind by removals and splits.
    ///
    /// This rebuilds the storage, so it costs O(n). The shape of the tree is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree: SplayTree<i32> = (0..100).collect();
    /// for value in 0..90 {
    ///     tree.remove(&value);
    /// }
    /// tree.shrink_to_fit();
    /// assert!(tree.capacity() < 100);
    /// assert_eq!(tree.first(), Some(&90));
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.raw.shrink_to_fit();
    }
}
