use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::iter::InOrder;
use super::node::{KeyNode, Links};
use super::splay::{ParentLinks, splay};
use crate::tracing_helpers::debug_log;

/// The splay tree backing `SplayTree`.
///
/// Every node records its parent handle, so any node can be splayed without the
/// caller carrying a path.
#[derive(Clone)]
pub(crate) struct RawSplayTree<T> {
    nodes: Arena<KeyNode<T>>,
    root: Option<Handle>,
}

/// Which side of the pivot a split hands to the new tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Less,
    Greater,
}

impl<T> RawSplayTree<T> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &KeyNode<T> {
        self.nodes.get(handle)
    }

    pub(crate) fn iter(&self) -> InOrder<'_, KeyNode<T>, true> {
        InOrder::new(&self.nodes, self.root, self.len())
    }

    pub(crate) fn iter_rev(&self) -> InOrder<'_, KeyNode<T>, false> {
        InOrder::new(&self.nodes, self.root, self.len())
    }

    /// Returns the outermost node on one side without restructuring.
    pub(crate) fn edge(&self, leftmost: bool) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(next) = self.nodes.get(current).child(leftmost) {
            current = next;
        }
        Some(current)
    }

    fn splay(&mut self, target: Handle) {
        splay(&mut self.nodes, &mut ParentLinks, target);
        self.root = Some(target);
    }

    /// Points the link that held `old` (in `parent`, or the root) at `new`.
    fn replace_link(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            Some(parent) => {
                let links = self.nodes.get_mut(parent);
                if links.left() == Some(old) {
                    links.set_left(new);
                } else {
                    links.set_right(new);
                }
            }
            None => self.root = new,
        }
        if let Some(new) = new {
            self.nodes.get_mut(new).set_parent(parent);
        }
    }

    /// Moves the `count` nodes under `top` out of this arena into a new tree.
    ///
    /// `top` must already be unlinked from its parent. The caller fixes up `self.root`.
    fn relocate(&mut self, top: Option<Handle>, count: usize) -> Self {
        let mut out = Self::with_capacity(count);
        let mut pending: SmallVec<[(Handle, Option<(Handle, bool)>); 32]> = SmallVec::new();
        pending.extend(top.map(|top| (top, None)));

        while let Some((old, attach)) = pending.pop() {
            let node = self.nodes.take(old);
            let (left, right) = (node.left(), node.right());
            let new = out.nodes.alloc(KeyNode::leaf(node.value, attach.map(|(parent, _)| parent)));
            match attach {
                Some((parent, true)) => out.nodes.get_mut(parent).set_left(Some(new)),
                Some((parent, false)) => out.nodes.get_mut(parent).set_right(Some(new)),
                None => out.root = Some(new),
            }
            pending.extend(left.map(|left| (left, Some((new, true)))));
            pending.extend(right.map(|right| (right, Some((new, false)))));
        }
        out
    }

    /// Counts the two detached subtrees under `a` and `b` one node at a time each,
    /// stopping as soon as one runs out. Returns whether `a` is the smaller (ties
    /// go to `a`) and that subtree's size.
    fn smaller_of(&self, a: Option<Handle>, b: Option<Handle>) -> (bool, usize) {
        let mut left: SmallVec<[Handle; 32]> = a.into_iter().collect();
        let mut right: SmallVec<[Handle; 32]> = b.into_iter().collect();
        let mut count = 0;
        loop {
            let Some(node) = left.pop() else { return (true, count) };
            let node = self.nodes.get(node);
            left.extend([node.left(), node.right()].into_iter().flatten());

            let Some(node) = right.pop() else { return (false, count) };
            let node = self.nodes.get(node);
            right.extend([node.left(), node.right()].into_iter().flatten());
            count += 1;
        }
    }

    /// Rebuilds the tree in a fresh arena sized to its live nodes.
    pub(crate) fn shrink_to_fit(&mut self) {
        let len = self.len();
        let root = self.root;
        *self = self.relocate(root, len);
    }
}

impl<T: Ord> RawSplayTree<T> {
    /// Descends toward `value` without restructuring. Returns the last node reached
    /// and how `value` compares to it.
    fn locate<Q>(&self, value: &Q) -> Option<(Handle, Ordering)>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;
        loop {
            let node = self.nodes.get(current);
            let ordering = value.cmp(node.value.borrow());
            let next = match ordering {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => None,
            };
            match next {
                Some(next) => current = next,
                None => return Some((current, ordering)),
            }
        }
    }

    /// Splays the node equal to `value`, or the last node on its search path, to the
    /// root. Returns how `value` compares to the new root.
    pub(crate) fn search<Q>(&mut self, value: &Q) -> Option<Ordering>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (node, ordering) = self.locate(value)?;
        self.splay(node);
        Some(ordering)
    }

    /// Inserts `value` unless an equal value is present. Either way the matching node
    /// ends up at the root. Returns whether `value` was inserted.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let Some((node, ordering)) = self.locate(&value) else {
            self.root = Some(self.nodes.alloc(KeyNode::leaf(value, None)));
            return true;
        };

        let leaf = match ordering {
            Ordering::Equal => {
                self.splay(node);
                return false;
            }
            Ordering::Less => {
                let leaf = self.nodes.alloc(KeyNode::leaf(value, Some(node)));
                self.nodes.get_mut(node).set_left(Some(leaf));
                leaf
            }
            Ordering::Greater => {
                let leaf = self.nodes.alloc(KeyNode::leaf(value, Some(node)));
                self.nodes.get_mut(node).set_right(Some(leaf));
                leaf
            }
        };
        self.splay(leaf);
        true
    }

    /// Removes the value equal to `value` and returns it.
    ///
    /// Afterwards the node that took the removed node's place in the tree (its parent,
    /// the promoted child, or the parent of the excised predecessor) is the root. When
    /// nothing matches, the last node on the search path is splayed instead.
    pub(crate) fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (node, ordering) = self.locate(value)?;
        if ordering != Ordering::Equal {
            self.splay(node);
            return None;
        }

        let target = self.nodes.get(node);
        let parent = target.parent();
        let (removed, replacement) = match (target.left(), target.right()) {
            (None, None) => {
                self.replace_link(parent, node, None);
                (self.nodes.take(node).value, parent)
            }
            (Some(child), None) | (None, Some(child)) => {
                self.replace_link(parent, node, Some(child));
                (self.nodes.take(node).value, parent.or(Some(child)))
            }
            (Some(left), Some(_)) => {
                // The in-order predecessor has no right child.
                let mut predecessor = left;
                while let Some(next) = self.nodes.get(predecessor).right() {
                    predecessor = next;
                }
                let above = self.nodes.get(predecessor).parent();
                let below = self.nodes.get(predecessor).left();
                self.replace_link(above, predecessor, below);

                let moved = self.nodes.take(predecessor).value;
                (mem::replace(&mut self.nodes.get_mut(node).value, moved), above)
            }
        };

        debug_log!(len = self.len(), "key-ordered remove");
        match replacement {
            Some(replacement) => self.splay(replacement),
            None => self.root = None,
        }
        Some(removed)
    }

    /// Splits off every value strictly on `side` of `value` into a new tree.
    ///
    /// The node matching (or nearest to) `value` is splayed to the root first. When
    /// that nearest node itself lies on `side`, it leaves together with its outer
    /// subtree and the inner subtree becomes this tree's root.
    ///
    /// After the splay the two halves are unlinked in O(1). Each tree owns its arena,
    /// so the smaller half is then moved into a fresh one and the larger half keeps
    /// the existing arena: O(min(k, n - k)) for a split into `k` and `n - k` values.
    pub(crate) fn split_off<Q>(&mut self, value: &Q, side: Side) -> Option<Self>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let ordering = self.search(value)?;
        let root = self.root?;
        let towards_left = side == Side::Less;

        // `value > root` while splitting off the lesser side (or the mirror) means the
        // root itself belongs to the new tree.
        let root_moves = match side {
            Side::Less => ordering == Ordering::Greater,
            Side::Greater => ordering == Ordering::Less,
        };

        // Below the cut hangs whatever does not go with the root.
        let cut_left = towards_left != root_moves;
        let below = self.nodes.get(root).child(cut_left);
        if cut_left {
            self.nodes.get_mut(root).set_left(None);
        } else {
            self.nodes.get_mut(root).set_right(None);
        }
        if let Some(below) = below {
            self.nodes.get_mut(below).set_parent(None);
        }
        let (stay, leave) = if root_moves { (below, Some(root)) } else { (Some(root), below) };

        let (leave_is_smaller, count) = self.smaller_of(leave, stay);
        let split = if leave_is_smaller {
            self.root = stay;
            self.relocate(leave, count)
        } else {
            let kept = self.relocate(stay, count);
            self.root = leave;
            mem::replace(self, kept)
        };
        debug_log!(?side, kept = self.len(), moved = split.len(), "split");
        Some(split)
    }
}
