use super::handle::Handle;

/// Child links shared by both node layouts.
pub(crate) trait Links {
    type Value;

    fn value(&self) -> &Self::Value;
    fn left(&self) -> Option<Handle>;
    fn right(&self) -> Option<Handle>;
    fn set_left(&mut self, child: Option<Handle>);
    fn set_right(&mut self, child: Option<Handle>);

    /// Returns the child on the given side (`true` = left).
    #[inline]
    fn child(&self, left: bool) -> Option<Handle> {
        if left { self.left() } else { self.right() }
    }
}

// Order-statistic vertex: caches its subtree size, carries no parent link.
#[derive(Clone, Debug)]
pub(crate) struct RankNode<T> {
    pub(crate) value: T,
    left: Option<Handle>,
    right: Option<Handle>,
    // Number of nodes in the subtree rooted here, including this one.
    size: usize,
}

impl<T> RankNode<T> {
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            size: 1,
        }
    }

    #[inline]
    pub(crate) const fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn set_size(&mut self, size: usize) {
        debug_assert!(size >= 1, "`RankNode::set_size()` - `size` must count the node itself!");
        self.size = size;
    }
}

impl<T> Links for RankNode<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    fn right(&self) -> Option<Handle> {
        self.right
    }

    fn set_left(&mut self, child: Option<Handle>) {
        self.left = child;
    }

    fn set_right(&mut self, child: Option<Handle>) {
        self.right = child;
    }
}

// Key-ordered vertex: the parent link is a lookup relation only.
#[derive(Clone, Debug)]
pub(crate) struct KeyNode<T> {
    pub(crate) value: T,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl<T> KeyNode<T> {
    pub(crate) const fn leaf(value: T, parent: Option<Handle>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }
}

impl<T> Links for KeyNode<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    fn right(&self) -> Option<Handle> {
        self.right
    }

    fn set_left(&mut self, child: Option<Handle>) {
        self.left = child;
    }

    fn set_right(&mut self, child: Option<Handle>) {
        self.right = child;
    }
}
