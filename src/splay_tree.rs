use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;

use crate::raw::{Handle, KeyNode, Links, RawSplayTree};

mod capacity;
mod iter;
mod split;

pub use iter::{Iter, IterRev};

/// An ordered set stored in a splay tree.
///
/// Every access (`insert`, `contains`, `remove`, and the splits) moves the touched
/// node to the root, so recently used values stay cheap to reach. Operations run in
/// amortized O(log n); a single operation on a tree that has not been accessed for a
/// while can take O(n).
///
/// Because lookups restructure the tree, [`contains`](SplayTree::contains) takes
/// `&mut self`. Iteration and [`first`](SplayTree::first)/[`last`](SplayTree::last)
/// only read.
///
/// It is a logic error for a value to be modified in such a way that its ordering
/// relative to any other value, as determined by [`Ord`], changes while it is in the
/// tree.
///
/// # Examples
///
/// ```
/// use splay_tree::SplayTree;
///
/// let mut tree = SplayTree::from([10, 5, 15, 3, 7]);
///
/// assert!(tree.contains(&7));
/// assert_eq!(tree.root().map(|node| *node.value()), Some(7));
///
/// let less = tree.remove_less(&7).unwrap();
/// assert_eq!(less.iter().copied().collect::<Vec<_>>(), [3, 5]);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [7, 10, 15]);
/// ```
pub struct SplayTree<T> {
    raw: RawSplayTree<T>,
}

/// Read-only view of one node, for diagnostics.
///
/// Obtained from [`SplayTree::root`]; [`parent`](NodeRef::parent) walks back up.
pub struct NodeRef<'a, T> {
    tree: &'a RawSplayTree<T>,
    node: &'a KeyNode<T>,
}

impl<T> SplayTree<T> {
    /// Makes a new, empty `SplayTree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        SplayTree { raw: RawSplayTree::new() }
    }

    /// Returns the number of values in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the smallest value without restructuring.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.edge(true).map(|node| &self.raw.node(node).value)
    }

    /// Returns the largest value without restructuring.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.edge(false).map(|node| &self.raw.node(node).value)
    }

    /// Gets an iterator over the values in ascending order.
    ///
    /// The iterator borrows the tree, so the tree cannot change while it is alive.
    /// Call `iter` again to start over.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::from([3, 1, 2]);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.raw.iter())
    }

    /// Gets an iterator over the values in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::from([3, 1, 2]);
    /// assert_eq!(tree.iter_rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev::new(self.raw.iter_rev())
    }

    /// Returns the root node for read-only inspection.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.raw.root().map(|handle| NodeRef::new(&self.raw, handle))
    }
}

impl<T: Ord> SplayTree<T> {
    /// Adds a value to the tree and splays it to the root.
    ///
    /// Returns whether the value was newly inserted. An equal value already in the
    /// tree is left in place (and splayed to the root).
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.raw.insert(value)
    }

    /// Returns `true` if the tree contains a value equal to `value`.
    ///
    /// The matching node, or the last node on the search path when there is none,
    /// becomes the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([1, 2, 3]);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&4));
    /// ```
    pub fn contains<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(value) == Some(Ordering::Equal)
    }

    /// Removes a value equal to `value`. Returns whether one was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([1, 2]);
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the value equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([String::from("a")]);
    /// assert_eq!(tree.take("a"), Some(String::from("a")));
    /// assert!(tree.is_empty());
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.take(value)
    }
}

impl<'a, T> NodeRef<'a, T> {
    fn new(tree: &'a RawSplayTree<T>, handle: Handle) -> Self {
        NodeRef {
            tree,
            node: tree.node(handle),
        }
    }

    /// The value stored in this node.
    #[must_use]
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// The left child, if any.
    #[must_use]
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node.left().map(|handle| NodeRef::new(self.tree, handle))
    }

    /// The right child, if any.
    #[must_use]
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node.right().map(|handle| NodeRef::new(self.tree, handle))
    }

    /// The parent, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node.parent().map(|handle| NodeRef::new(self.tree, handle))
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("left", &self.left().map(|node| node.value()))
            .field("right", &self.right().map(|node| node.value()))
            .field("parent", &self.parent().map(|node| node.value()))
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for SplayTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for SplayTree<T> {
    fn clone(&self) -> Self {
        SplayTree { raw: self.raw.clone() }
    }
}

impl<T> Default for SplayTree<T> {
    fn default() -> Self {
        SplayTree::new()
    }
}

impl<T: Ord> FromIterator<T> for SplayTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = SplayTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for SplayTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for SplayTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SplayTree<T> {
    /// Builds a tree by inserting the values in array order.
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a SplayTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(SplayTree<u8>: Send, Sync, Clone, Default);
    assert_impl_all!(Iter<'static, u8>: Send, Sync, Clone, ExactSizeIterator);

    #[test]
    fn debug_formats_as_a_set() {
        let tree = SplayTree::from([2, 1]);
        assert_eq!(format!("{tree:?}"), "{1, 2}");
    }

    #[test]
    fn node_refs_walk_down_and_back_up() {
        let mut tree = SplayTree::from([10, 5, 15, 3, 7]);
        tree.contains(&7);
        let root = tree.root().unwrap();
        assert_eq!(*root.value(), 7);
        assert!(root.parent().is_none());
        let left = root.left().unwrap();
        assert_eq!(left.parent().map(|node| *node.value()), Some(7));
        assert!(root.left().into_iter().chain(root.right()).all(|child| child.parent().is_some()));
    }

    #[test]
    fn first_and_last_do_not_splay() {
        let tree = SplayTree::from([4, 8, 2, 6]);
        let root = tree.root().map(|node| *node.value());
        assert_eq!(tree.first(), Some(&2));
        assert_eq!(tree.last(), Some(&8));
        assert_eq!(tree.root().map(|node| *node.value()), root);
    }

    #[test]
    fn extend_from_references() {
        let mut tree: SplayTree<i32> = SplayTree::new();
        tree.extend(&[3, 1, 2, 3]);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }
}
