use core::fmt;
use core::iter::FusedIterator;

use crate::raw::{InOrder, KeyNode};

/// An iterator over the values of a `SplayTree`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`SplayTree`].
///
/// [`iter`]: super::SplayTree::iter
/// [`SplayTree`]: super::SplayTree
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: InOrder<'a, KeyNode<T>, true>,
}

/// An iterator over the values of a `SplayTree`, in descending order.
///
/// This `struct` is created by the [`iter_rev`] method on [`SplayTree`].
///
/// [`iter_rev`]: super::SplayTree::iter_rev
/// [`SplayTree`]: super::SplayTree
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterRev<'a, T: 'a> {
    inner: InOrder<'a, KeyNode<T>, false>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(inner: InOrder<'a, KeyNode<T>, true>) -> Self {
        Iter { inner }
    }
}

impl<'a, T> IterRev<'a, T> {
    pub(super) fn new(inner: InOrder<'a, KeyNode<T>, false>) -> Self {
        IterRev { inner }
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

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for IterRev<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> FusedIterator for IterRev<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Clone for IterRev<'_, T> {
    fn clone(&self) -> Self {
        IterRev {
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

impl<T> Default for IterRev<'_, T> {
    fn default() -> Self {
        IterRev {
            inner: InOrder::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for IterRev<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::super::SplayTree;
    use super::*;

    #[test]
    fn both_directions_report_exact_length() {
        let tree = SplayTree::from([5, 1, 4, 2, 3]);
        let mut forward = tree.iter();
        let mut backward = tree.iter_rev();
        assert_eq!(forward.len(), 5);
        assert_eq!(forward.next(), Some(&1));
        assert_eq!(backward.next(), Some(&5));
        assert_eq!(forward.len(), 4);
        assert_eq!(backward.len(), 4);
    }

    #[test]
    fn exhausted_iterators_stay_exhausted() {
        let tree = SplayTree::from([1]);
        let mut iter = tree.iter_rev();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn default_iterators_are_empty() {
        assert_eq!(Iter::<u8>::default().next(), None);
        assert_eq!(IterRev::<u8>::default().len(), 0);
    }

    #[test]
    fn debug_lists_the_remaining_values() {
        let tree = SplayTree::from([2, 3, 1]);
        let mut iter = tree.iter_rev();
        iter.next();
        assert_eq!(format!("{iter:?}"), "[2, 1]");
        assert_eq!(iter.collect::<Vec<_>>(), [&2, &1]);
    }
}
