/// A 1-based position in the in-order sequence of an
/// [`OrderStatisticTree`](crate::OrderStatisticTree).
///
/// Indexing by `Position` reads without splaying.
///
/// # Examples
///
/// ```
/// use splay_tree::{OrderStatisticTree, Position};
///
/// let mut seq = OrderStatisticTree::new();
/// seq.push_back('a');
/// seq.push_back('b');
///
/// assert_eq!(seq[Position(2)], 'b');
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position(pub usize);
