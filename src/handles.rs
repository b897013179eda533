//! Handle Table - slot allocation for engine-visible handles.
//!
//! - Slot index = handle, stable for as long as the handle is live
//! - Free list reused LIFO: the most recently released handle comes back first
//! - No generations: a stale handle that got reused names the new node
//! - [`INVALID_HANDLE`] is never issued; inserting into a full table fails

use crate::types::{Handle, INVALID_HANDLE, ROOT_HANDLE};

/// Index-addressed table of live nodes with a free list.
#[derive(Debug, Clone)]
pub struct HandleTable<N> {
    slots: Vec<Option<N>>,
    free: Vec<Handle>,
    /// Slots never grow past this many.
    limit: usize,
}

impl<N> Default for HandleTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> HandleTable<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            limit: INVALID_HANDLE as usize,
        }
    }

    #[cfg(test)]
    fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::new()
        }
    }

    /// Empty the table and register `root` as [`ROOT_HANDLE`].
    pub fn reset_with_root(&mut self, root: N) -> Handle {
        self.clear();
        self.slots.push(Some(root));
        ROOT_HANDLE
    }

    /// Drop every slot and the free list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Store `node`, reusing the last freed handle or appending a new one.
    ///
    /// Returns `None` (dropping `node`) when no handle is left.
    pub fn insert(&mut self, node: N) -> Option<Handle> {
        if let Some(handle) = self.free.pop() {
            self.slots[handle as usize] = Some(node);
            return Some(handle);
        }
        let index = self.slots.len();
        let handle = Handle::try_from(index).ok().filter(|_| index < self.limit)?;
        self.slots.push(Some(node));
        Some(handle)
    }

    /// Release a live handle. Returns `None` (and changes nothing) when the
    /// handle is out of range or already free.
    pub fn release(&mut self, handle: Handle) -> Option<N> {
        let node = self.slots.get_mut(handle as usize)?.take()?;
        self.free.push(handle);
        Some(node)
    }

    pub fn get(&self, handle: Handle) -> Option<&N> {
        self.slots.get(handle as usize)?.as_ref()
    }

    pub fn is_live(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Number of live handles.
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of slots, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Free handles, next to be reused last.
    pub fn free_handles(&self) -> &[Handle] {
        &self.free
    }
}
