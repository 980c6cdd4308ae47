//! Node storage owned by a single tree.
//!
//! Links between nodes are [`Handle`]s into this arena rather than pointers, so the
//! tree needs no unsafe code and parent links cannot dangle. Slots hold `Option<T>`
//! because removal moves a node's value out while other handles keep their indices;
//! the emptied slot waits on the free list. The arena belongs to exactly one tree,
//! so dropping the tree drops all of its nodes at once.

use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for the nodes of one tree.
///
/// Vacated slots go on a free list and are handed out again by [`Arena::alloc`],
/// so a handle stays valid exactly as long as its node is live. Dropping the
/// arena drops every remaining node without walking the tree.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live nodes.
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn alloc(&mut self, node: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.to_index()] = Some(node);
            handle
        } else {
            assert!(
                self.slots.len() <= Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX + 1
            );
            self.slots.push(Some(node));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Moves the node out of its slot and recycles the handle.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let node = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        // Nothing live is left to address, so the vacant slots can go.
        if self.free.len() == self.slots.len() {
            self.clear();
        }
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
