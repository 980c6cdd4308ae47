use core::borrow::Borrow;

use super::SplayTree;
use crate::error::{Error, Result};
use crate::raw::Side;

impl<T: Ord> SplayTree<T> {
    /// Moves every value less than `value` into a new tree and returns it.
    ///
    /// `self` keeps the values greater than or equal to `value`, so a value equal to
    /// the pivot never leaves. The pivot does not need to be present.
    ///
    /// Each tree owns its node storage, so whichever half is smaller is copied into
    /// new storage while the larger half keeps the existing one. On top of the
    /// amortized O(log n) splay the split costs time proportional to the smaller half.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] when `self` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::{Error, SplayTree};
    ///
    /// let mut tree = SplayTree::from([1, 3, 5, 7]);
    /// let less = tree.remove_less(&4)?;
    /// assert_eq!(less.iter().copied().collect::<Vec<_>>(), [1, 3]);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 7]);
    ///
    /// let mut empty: SplayTree<i32> = SplayTree::new();
    /// assert_eq!(empty.remove_less(&4).unwrap_err(), Error::EmptyTree);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn remove_less<Q>(&mut self, value: &Q) -> Result<SplayTree<T>>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.split(value, Side::Less)
    }

    /// Moves every value greater than `value` into a new tree and returns it.
    ///
    /// `self` keeps the values less than or equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] when `self` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([1, 3, 5, 7]);
    /// let greater = tree.remove_greater(&5)?;
    /// assert_eq!(greater.iter().copied().collect::<Vec<_>>(), [7]);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
    /// # Ok::<(), splay_tree::Error>(())
    /// ```
    pub fn remove_greater<Q>(&mut self, value: &Q) -> Result<SplayTree<T>>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.split(value, Side::Greater)
    }

    fn split<Q>(&mut self, value: &Q, side: Side) -> Result<SplayTree<T>>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let raw = self.raw.split_off(value, side).ok_or(Error::EmptyTree)?;
        Ok(SplayTree { raw })
    }
}
