use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::Position;
use crate::error::Result;
use crate::raw::{InOrder, Links, RankNode, RawOrderStatisticTree};

mod capacity;

/// A sequence stored in a splay tree and addressed by 1-based position.
///
/// The tree keeps no notion of value ordering; the in-order sequence of its nodes
/// *is* the sequence, and the same value may appear at any number of positions.
/// Every node caches the size of its subtree, which lets [`search`] and [`insert`]
/// find the k-th slot in amortized O(log n).
///
/// Like any splay tree it restructures on access: [`search`] and [`insert`] leave
/// the accessed element at the root. [`get`] and indexing by [`Position`] only read.
///
/// [`search`]: OrderStatisticTree::search
/// [`insert`]: OrderStatisticTree::insert
/// [`get`]: OrderStatisticTree::get
///
/// # Examples
///
/// ```
/// use splay_tree::OrderStatisticTree;
///
/// let mut seq = OrderStatisticTree::new();
/// for (position, value) in [5, 7, 2, 1, 4, 0].into_iter().enumerate() {
///     seq.insert(value, position + 1).unwrap();
/// }
/// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [5, 7, 2, 1, 4, 0]);
///
/// // Position 5 holds 4; searching for it makes it the root.
/// assert_eq!(seq.search(5), Ok(&4));
/// assert_eq!(seq.root().map(|node| *node.value()), Some(4));
/// ```
pub struct OrderStatisticTree<T> {
    raw: RawOrderStatisticTree<T>,
}

/// An iterator over the elements of an `OrderStatisticTree`, in sequence order.
///
/// This `struct` is created by the [`iter`] method on [`OrderStatisticTree`].
///
/// [`iter`]: OrderStatisticTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: InOrder<'a, RankNode<T>, true>,
}

/// Read-only view of one node, for diagnostics.
///
/// Obtained from [`OrderStatisticTree::root`] and walked with [`left`] and [`right`].
///
/// [`left`]: NodeRef::left
/// [`right`]: NodeRef::right
pub struct NodeRef<'a, T> {
    tree: &'a RawOrderStatisticTree<T>,
    node: &'a RankNode<T>,
}

impl<T> OrderStatisticTree<T> {
    /// Makes a new, empty `OrderStatisticTree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::OrderStatisticTree;
    ///
    /// let seq: OrderStatisticTree<u8> = OrderStatisticTree::new();
    /// assert!(seq.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        OrderStatisticTree {
            raw: RawOrderStatisticTree::new(),
        }
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the element at `position` and splays it to the root.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`](crate::Error::EmptyTree) when the sequence is empty,
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) unless `1 <= position <= len`.
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::{Error, OrderStatisticTree};
    ///
    /// let mut seq: OrderStatisticTree<_> = ['a', 'b', 'c'].into_iter().collect();
    /// assert_eq!(seq.search(2), Ok(&'b'));
    /// assert_eq!(seq.search(4), Err(Error::OutOfRange { position: 4, len: 3 }));
    /// ```
    pub fn search(&mut self, position: usize) -> Result<&T> {
        let node = self.raw.search(position)?;
        Ok(&self.raw.node(node).value)
    }

    /// Inserts `value` so that it becomes the element at `position`; the elements
    /// from `position` onwards shift back by one. The new element ends up at the
    /// root.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) unless
    /// `1 <= position <= len + 1`.
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::OrderStatisticTree;
    ///
    /// let mut seq: OrderStatisticTree<_> = [1, 3].into_iter().collect();
    /// seq.insert(2, 2).unwrap();
    /// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn insert(&mut self, value: T, position: usize) -> Result<&T> {
        let node = self.raw.insert(value, position)?;
        Ok(&self.raw.node(node).value)
    }

    /// Appends `value` at the end of the sequence.
    ///
    /// # Panics
    ///
    /// Never in a consistent tree; a panic here means the cached sizes are corrupt.
    pub fn push_back(&mut self, value: T) {
        let position = self.len() + 1;
        self.raw
            .insert(value, position)
            .expect("`OrderStatisticTree::push_back()` - `len + 1` must be a valid position!");
    }

    /// Prepends `value` at the start of the sequence.
    ///
    /// # Panics
    ///
    /// Never in a consistent tree; a panic here means the cached sizes are corrupt.
    pub fn push_front(&mut self, value: T) {
        self.raw
            .insert(value, 1)
            .expect("`OrderStatisticTree::push_front()` - `1` must be a valid position!");
    }

    /// Removes and returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Same as [`search`](OrderStatisticTree::search).
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::OrderStatisticTree;
    ///
    /// let mut seq: OrderStatisticTree<_> = "abc".chars().collect();
    /// assert_eq!(seq.remove(2), Ok('b'));
    /// assert_eq!(seq.iter().collect::<String>(), "ac");
    /// ```
    pub fn remove(&mut self, position: usize) -> Result<T> {
        self.raw.remove(position)
    }

    /// Returns the element at `position` without restructuring, or `None` when the
    /// position is out of range.
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.raw.get(position).map(|node| &self.raw.node(node).value)
    }

    /// Returns a mutable reference to the element at `position` without restructuring.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        let node = self.raw.get(position)?;
        Some(&mut self.raw.node_mut(node).value)
    }

    /// Gets an iterator over the elements in sequence order.
    ///
    /// Each call starts from the first element again.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.raw.iter() }
    }

    /// Returns the root node for read-only inspection.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.raw.root().map(|handle| NodeRef::new(&self.raw, handle))
    }
}

impl<'a, T> NodeRef<'a, T> {
    fn new(tree: &'a RawOrderStatisticTree<T>, handle: crate::raw::Handle) -> Self {
        NodeRef {
            tree,
            node: tree.node(handle),
        }
    }

    /// The element stored in this node.
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

    /// Number of elements in the subtree rooted at this node.
    #[must_use]
    pub fn size(&self) -> usize {
        self.node.size()
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
            .field("size", &self.size())
            .finish()
    }
}

/// Indexes the sequence by position without restructuring.
///
/// # Panics
///
/// Panics if the position is out of range.
impl<T> Index<Position> for OrderStatisticTree<T> {
    type Output = T;

    fn index(&self, position: Position) -> &Self::Output {
        self.get(position.0).expect("position out of range")
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderStatisticTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for OrderStatisticTree<T> {
    fn clone(&self) -> Self {
        OrderStatisticTree { raw: self.raw.clone() }
    }
}

impl<T> Default for OrderStatisticTree<T> {
    fn default() -> Self {
        OrderStatisticTree::new()
    }
}

impl<T> FromIterator<T> for OrderStatisticTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = OrderStatisticTree::new();
        seq.extend(iter);
        seq
    }
}

/// Appends every element of the iterator.
impl<T> Extend<T> for OrderStatisticTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderStatisticTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Iter {
            inner: InOrder::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
