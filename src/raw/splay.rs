//! Rotation primitives and the splay procedure.
//!
//! Both tree layouts share this code. What differs between them is captured by two
//! traits:
//!
//! - [`SplayStore`] reads and writes child links, records parent links (key-ordered
//!   layout) and refreshes cached subtree sizes (order-statistic layout).
//! - [`Ancestry`] finds the splay target's parent, grandparent and great-grandparent,
//!   either from stored parent links ([`ParentLinks`]) or from the ancestors collected
//!   during descent ([`Path`]).

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{KeyNode, Links, RankNode};
use crate::tracing_helpers::trace_log;

pub(crate) trait SplayStore {
    type Node: Links;

    fn node(&self, handle: Handle) -> &Self::Node;
    fn node_mut(&mut self, handle: Handle) -> &mut Self::Node;

    /// Records that `child` now hangs directly below `parent` (`None` = root).
    fn set_parent(&mut self, _child: Handle, _parent: Option<Handle>) {}

    /// Recomputes the cached metadata of `node` from its current children.
    fn refresh(&mut self, _node: Handle) {}
}

pub(crate) trait Ancestry<S: ?Sized> {
    /// Returns the node `levels` above `node`, where `1` is the parent.
    fn ancestor(&self, store: &S, node: Handle, levels: usize) -> Option<Handle>;

    /// Accounts for the splay target having moved `levels` closer to the root.
    fn ascend(&mut self, levels: usize);
}

/// Returns the cached size of the subtree behind `link`, zero when absent.
#[inline]
pub(crate) fn size_of<T>(arena: &Arena<RankNode<T>>, link: Option<Handle>) -> usize {
    link.map_or(0, |handle| arena.get(handle).size())
}

impl<T> SplayStore for Arena<RankNode<T>> {
    type Node = RankNode<T>;

    #[inline]
    fn node(&self, handle: Handle) -> &RankNode<T> {
        self.get(handle)
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut RankNode<T> {
        self.get_mut(handle)
    }

    fn refresh(&mut self, node: Handle) {
        let current = self.get(node);
        let size = 1 + size_of(self, current.left()) + size_of(self, current.right());
        self.get_mut(node).set_size(size);
    }
}

impl<T> SplayStore for Arena<KeyNode<T>> {
    type Node = KeyNode<T>;

    #[inline]
    fn node(&self, handle: Handle) -> &KeyNode<T> {
        self.get(handle)
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut KeyNode<T> {
        self.get_mut(handle)
    }

    fn set_parent(&mut self, child: Handle, parent: Option<Handle>) {
        self.get_mut(child).set_parent(parent);
    }
}

/// Ancestry read from the parent links stored in each [`KeyNode`].
pub(crate) struct ParentLinks;

impl<T> Ancestry<Arena<KeyNode<T>>> for ParentLinks {
    fn ancestor(&self, store: &Arena<KeyNode<T>>, node: Handle, levels: usize) -> Option<Handle> {
        let mut current = node;
        for _ in 0..levels {
            current = store.get(current).parent()?;
        }
        Some(current)
    }

    fn ascend(&mut self, _levels: usize) {}
}

/// Ancestors of the node a descent stopped at, ordered from the root down to its
/// parent. Stands in for parent links in the order-statistic layout.
#[derive(Debug, Default)]
pub(crate) struct Path {
    ancestors: SmallVec<[Handle; 32]>,
}

impl Path {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, handle: Handle) {
        self.ancestors.push(handle);
    }

    pub(crate) fn last(&self) -> Option<Handle> {
        self.ancestors.last().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.ancestors.len()
    }
}

impl<S: ?Sized> Ancestry<S> for Path {
    fn ancestor(&self, _store: &S, _node: Handle, levels: usize) -> Option<Handle> {
        let depth = self.ancestors.len();
        if levels == 0 || levels > depth {
            return None;
        }
        Some(self.ancestors[depth - levels])
    }

    fn ascend(&mut self, levels: usize) {
        let depth = self.ancestors.len().saturating_sub(levels);
        self.ancestors.truncate(depth);
    }
}

/// Points `grandparent`'s link that referenced `old` at `new`; with no grandparent
/// `new` becomes a root.
fn replace_child<S: SplayStore + ?Sized>(store: &mut S, grandparent: Option<Handle>, old: Handle, new: Handle) {
    if let Some(grandparent) = grandparent {
        let links = store.node_mut(grandparent);
        if links.left() == Some(old) {
            links.set_left(Some(new));
        } else {
            assert_eq!(links.right(), Some(old), "`replace_child()` - `grandparent` does not own `parent`!");
            links.set_right(Some(new));
        }
    }
    store.set_parent(new, grandparent);
}

/// Swaps `node` with its `parent`, keeping the in-order sequence. `node_is_left`
/// names the side of `parent` that `node` hangs from.
fn rotate<S: SplayStore + ?Sized>(
    store: &mut S,
    node: Handle,
    parent: Handle,
    grandparent: Option<Handle>,
    node_is_left: bool,
) {
    assert_eq!(
        store.node(parent).child(node_is_left),
        Some(node),
        "`rotate()` - `node` is not the expected child of `parent`!"
    );

    // The subtree between `node` and `parent` in sequence order changes owner.
    let inner = store.node(node).child(!node_is_left);
    if node_is_left {
        store.node_mut(parent).set_left(inner);
        store.node_mut(node).set_right(Some(parent));
    } else {
        store.node_mut(parent).set_right(inner);
        store.node_mut(node).set_left(Some(parent));
    }
    if let Some(inner) = inner {
        store.set_parent(inner, Some(parent));
    }
    store.set_parent(parent, Some(node));
    replace_child(store, grandparent, parent, node);

    store.refresh(parent);
    store.refresh(node);
}

/// Lifts `node`, the left child of `parent`, above it.
pub(crate) fn rotate_right<S: SplayStore + ?Sized>(
    store: &mut S,
    node: Handle,
    parent: Handle,
    grandparent: Option<Handle>,
) {
    rotate(store, node, parent, grandparent, true);
}

/// Lifts `node`, the right child of `parent`, above it.
pub(crate) fn rotate_left<S: SplayStore + ?Sized>(
    store: &mut S,
    node: Handle,
    parent: Handle,
    grandparent: Option<Handle>,
) {
    rotate(store, node, parent, grandparent, false);
}

/// Lifts `node` above `parent`, whichever side of it `node` hangs from.
fn rotate_up<S: SplayStore + ?Sized>(store: &mut S, node: Handle, parent: Handle, grandparent: Option<Handle>) {
    if store.node(parent).left() == Some(node) {
        rotate_right(store, node, parent, grandparent);
    } else {
        rotate_left(store, node, parent, grandparent);
    }
}

/// Rotates `target` up until it has no ancestor left. The caller must install
/// `target` as its tree's root afterwards.
pub(crate) fn splay<S, A>(store: &mut S, ancestry: &mut A, target: Handle)
where
    S: SplayStore + ?Sized,
    A: Ancestry<S> + ?Sized,
{
    while let Some(parent) = ancestry.ancestor(store, target, 1) {
        let Some(grandparent) = ancestry.ancestor(store, target, 2) else {
            trace_log!(?target, ?parent, "splay: zig");
            rotate_up(store, target, parent, None);
            ancestry.ascend(1);
            continue;
        };

        let great_grandparent = ancestry.ancestor(store, target, 3);
        let target_is_left = store.node(parent).left() == Some(target);
        let parent_is_left = store.node(grandparent).left() == Some(parent);

        if target_is_left == parent_is_left {
            trace_log!(?target, ?parent, ?grandparent, "splay: zig-zig");
            rotate_up(store, parent, grandparent, great_grandparent);
            rotate_up(store, target, parent, great_grandparent);
        } else {
            trace_log!(?target, ?parent, ?grandparent, "splay: zig-zag");
            rotate_up(store, target, parent, Some(grandparent));
            rotate_up(store, target, grandparent, great_grandparent);
        }
        ancestry.ascend(2);
    }
}
