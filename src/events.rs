//! Event Bridge - interaction listeners that report integer codes.
//!
//! Each handle has at most one tracked listener per event kind. A listener
//! does one thing: call the engine callback with the code it was bound to.
//!
//! Registering a second click (or hover) listener on the same handle replaces
//! the tracked entry but leaves the first listener attached to the node; it
//! can no longer be removed through the bridge.

use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::{Dom, Listener};
use crate::types::{EventKind, Handle};

/// Callback into the engine, receiving the event code of an interaction.
pub type EventCallback = Rc<dyn Fn(u32)>;

/// Bind `code` to the engine callback.
pub fn bind(callback: &EventCallback, code: u32) -> Listener {
    let callback = callback.clone();
    Rc::new(move || {
        log::trace!("delivering event code {code}");
        callback(code);
    })
}

// =============================================================================
// Listener Slots
// =============================================================================

/// One tracked listener per handle for a single event kind.
pub struct ListenerSlots {
    kind: EventKind,
    by_handle: HashMap<Handle, Listener>,
}

impl ListenerSlots {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            by_handle: HashMap::new(),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Attach a listener for `code` and track it under `handle`.
    pub fn set<D: Dom>(
        &mut self,
        dom: &mut D,
        handle: Handle,
        node: &D::Node,
        callback: &EventCallback,
        code: u32,
    ) {
        let listener = bind(callback, code);
        dom.add_listener(node, self.kind, listener.clone());
        self.by_handle.insert(handle, listener);
    }

    /// Detach the tracked listener of `handle`, if any.
    pub fn remove<D: Dom>(&mut self, dom: &mut D, handle: Handle, node: &D::Node) {
        if let Some(listener) = self.by_handle.remove(&handle) {
            dom.remove_listener(node, self.kind, &listener);
        }
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.by_handle.contains_key(&handle)
    }

    /// Stop tracking `handle` without touching the node.
    pub fn forget(&mut self, handle: Handle) {
        self.by_handle.remove(&handle);
    }

    pub fn clear(&mut self) {
        self.by_handle.clear();
    }

    pub fn len(&self) -> usize {
        self.by_handle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_handle.is_empty()
    }
}

// =============================================================================
// Bridge
// =============================================================================

/// Click and hover bookkeeping for every handle.
pub struct EventBridge {
    pub click: ListenerSlots,
    pub hover: ListenerSlots,
}

impl EventBridge {
    /// `hover_kind` is the event hover handlers attach to.
    pub fn new(hover_kind: EventKind) -> Self {
        Self {
            click: ListenerSlots::new(EventKind::Click),
            hover: ListenerSlots::new(hover_kind),
        }
    }

    /// Drop all bookkeeping for a released handle.
    pub fn forget(&mut self, handle: Handle) {
        self.click.forget(handle);
        self.hover.forget(handle);
    }

    pub fn clear(&mut self) {
        self.click.clear();
        self.hover.clear();
    }
}
