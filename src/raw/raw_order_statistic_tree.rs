use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::iter::InOrder;
use super::node::{Links, RankNode};
use super::splay::{Path, SplayStore, size_of, splay};
use crate::error::{Error, Result};
use crate::tracing_helpers::debug_log;

/// The splay tree backing `OrderStatisticTree`.
///
/// Nodes carry subtree sizes and no parent links; every operation collects the
/// ancestors it passes in a [`Path`] and hands that to the splay.
#[derive(Clone)]
pub(crate) struct RawOrderStatisticTree<T> {
    nodes: Arena<RankNode<T>>,
    root: Option<Handle>,
}

impl<T> RawOrderStatisticTree<T> {
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

    pub(crate) fn len(&self) -> usize {
        size_of(&self.nodes, self.root)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &RankNode<T> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut RankNode<T> {
        self.nodes.get_mut(handle)
    }

    pub(crate) fn iter(&self) -> InOrder<'_, RankNode<T>, true> {
        InOrder::new(&self.nodes, self.root, self.len())
    }

    // Accepts `1..=upper`.
    fn check_position(&self, position: usize, upper: usize) -> Result<()> {
        if (1..=upper).contains(&position) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                position,
                len: self.len(),
            })
        }
    }

    /// Walks from `from` to the node at `position` within its subtree, recording the
    /// ancestors passed. `position` must be in range for that subtree.
    fn descend(&self, from: Handle, mut position: usize, path: &mut Path) -> Handle {
        let mut current = from;
        loop {
            let node = self.nodes.get(current);
            let left_size = size_of(&self.nodes, node.left());
            let next = match position.cmp(&(left_size + 1)) {
                Ordering::Less => node.left(),
                Ordering::Greater => {
                    position -= left_size + 1;
                    node.right()
                }
                Ordering::Equal => None,
            };
            let Some(next) = next else { return current };
            path.push(current);
            current = next;
        }
    }

    /// Returns the node at `position` without restructuring.
    pub(crate) fn get(&self, position: usize) -> Option<Handle> {
        let root = self.root?;
        if !(1..=self.len()).contains(&position) {
            return None;
        }
        let mut path = Path::new();
        Some(self.descend(root, position, &mut path))
    }

    /// Splays the node at `position` to the root and returns it.
    pub(crate) fn search(&mut self, position: usize) -> Result<Handle> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        self.check_position(position, self.len())?;

        let mut path = Path::new();
        let target = self.descend(root, position, &mut path);
        splay(&mut self.nodes, &mut path, target);
        debug_assert_eq!(path.len(), 0, "`search()` - splay stopped below the root!");
        self.root = Some(target);
        Ok(target)
    }

    /// Inserts `value` so that it ends up at `position`, then splays it to the root.
    pub(crate) fn insert(&mut self, value: T, position: usize) -> Result<Handle> {
        self.check_position(position, self.len() + 1)?;
        let Some(root) = self.root else {
            let node = self.nodes.alloc(RankNode::leaf(value));
            self.root = Some(node);
            return Ok(node);
        };

        let mut path = Path::new();
        let mut current = root;
        let mut position = position;
        let node = loop {
            let here = self.nodes.get(current);
            let left_size = size_of(&self.nodes, here.left());
            match position.cmp(&(left_size + 1)) {
                Ordering::Less => {
                    if let Some(left) = here.left() {
                        path.push(current);
                        current = left;
                    } else {
                        path.push(current);
                        let leaf = self.nodes.alloc(RankNode::leaf(value));
                        self.nodes.get_mut(current).set_left(Some(leaf));
                        break leaf;
                    }
                }
                Ordering::Greater => {
                    position -= left_size + 1;
                    if let Some(right) = here.right() {
                        path.push(current);
                        current = right;
                    } else {
                        path.push(current);
                        let leaf = self.nodes.alloc(RankNode::leaf(value));
                        self.nodes.get_mut(current).set_right(Some(leaf));
                        break leaf;
                    }
                }
                // `current` holds the slot: the new node becomes its predecessor and
                // takes its place under the parent.
                Ordering::Equal => break self.splice_before(current, path.last(), value),
            }
        };

        // The splay rotates every ancestor on `path`, which recomputes their sizes.
        splay(&mut self.nodes, &mut path, node);
        debug_assert_eq!(path.len(), 0, "`insert()` - splay stopped below the root!");
        self.root = Some(node);
        Ok(node)
    }

    fn splice_before(&mut self, occupant: Handle, parent: Option<Handle>, value: T) -> Handle {
        let mut node = RankNode::leaf(value);
        node.set_left(self.nodes.get(occupant).left());
        node.set_right(Some(occupant));
        let node = self.nodes.alloc(node);

        self.nodes.get_mut(occupant).set_left(None);
        self.nodes.refresh(occupant);
        self.nodes.refresh(node);

        if let Some(parent) = parent {
            let links = self.nodes.get_mut(parent);
            if links.left() == Some(occupant) {
                links.set_left(Some(node));
            } else {
                links.set_right(Some(node));
            }
        }
        node
    }

    /// Removes and returns the value at `position`.
    ///
    /// The target is splayed to the root; its left subtree's last node is then
    /// splayed to the top of that subtree and adopts the right subtree.
    pub(crate) fn remove(&mut self, position: usize) -> Result<T> {
        let target = self.search(position)?;
        let removed = self.nodes.take(target);
        let (left, right) = (removed.left(), removed.right());

        self.root = match left {
            None => right,
            Some(left) => {
                let mut path = Path::new();
                let last = self.descend(left, size_of(&self.nodes, Some(left)), &mut path);
                splay(&mut self.nodes, &mut path, last);
                self.nodes.get_mut(last).set_right(right);
                self.nodes.refresh(last);
                Some(last)
            }
        };
        debug_log!(position, len = self.len(), "order-statistic remove");
        Ok(removed.value)
    }
}
