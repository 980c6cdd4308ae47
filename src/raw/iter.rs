use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Links;

/// Stack-based in-order cursor shared by both tree layouts.
///
/// The stack holds the nodes still to be yielded along the current spine: the
/// left spine when `ASCENDING`, the right spine otherwise. The cursor only reads
/// the arena, so it never changes the tree's shape.
pub(crate) struct InOrder<'a, N, const ASCENDING: bool> {
    nodes: Option<&'a Arena<N>>,
    stack: SmallVec<[Handle; 32]>,
    remaining: usize,
}

impl<'a, N: Links, const ASCENDING: bool> InOrder<'a, N, ASCENDING> {
    pub(crate) fn new(nodes: &'a Arena<N>, root: Option<Handle>, len: usize) -> Self {
        let mut cursor = Self {
            nodes: Some(nodes),
            stack: SmallVec::new(),
            remaining: len,
        };
        cursor.push_spine(root);
        cursor
    }

    // Pushes `from` and every node reached by walking toward the first element.
    fn push_spine(&mut self, from: Option<Handle>) {
        let Some(nodes) = self.nodes else { return };
        let mut current = from;
        while let Some(handle) = current {
            self.stack.push(handle);
            current = nodes.get(handle).child(ASCENDING);
        }
    }
}

impl<N, const ASCENDING: bool> Default for InOrder<'_, N, ASCENDING> {
    fn default() -> Self {
        Self {
            nodes: None,
            stack: SmallVec::new(),
            remaining: 0,
        }
    }
}

impl<N, const ASCENDING: bool> Clone for InOrder<'_, N, ASCENDING> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, N: Links + 'a, const ASCENDING: bool> Iterator for InOrder<'a, N, ASCENDING> {
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes?;
        let handle = self.stack.pop()?;
        let node = nodes.get(handle);
        self.push_spine(node.child(!ASCENDING));
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, N: Links + 'a, const ASCENDING: bool> ExactSizeIterator for InOrder<'a, N, ASCENDING> {}

impl<'a, N: Links + 'a, const ASCENDING: bool> FusedIterator for InOrder<'a, N, ASCENDING> {}
