//! Dom - the seam to the host's presentation layer.
//!
//! The registry never inspects nodes. It only asks the host to create,
//! attach, detach and decorate them, so any tree with these operations can
//! sit behind it ([`HeadlessDom`](crate::HeadlessDom) is the in-memory one).

use std::rc::Rc;

use crate::types::{ClassFlags, EventKind, StyleProperty, Tag};

/// A bound interaction listener.
///
/// Listeners are compared by identity (`Rc::ptr_eq`), so removal needs the
/// same `Rc` that was added.
pub type Listener = Rc<dyn Fn()>;

/// Host presentation tree.
pub trait Dom {
    /// Reference to a host node. Cheap to clone.
    type Node: Clone;

    fn create_element(&mut self, tag: Tag) -> Self::Node;

    /// Detach every child of `node`.
    fn remove_children(&mut self, node: &Self::Node);

    /// Attach `child` as the last child of `parent`, moving it if attached elsewhere.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Detach `node` from its parent. No-op when already detached.
    fn detach(&mut self, node: &Self::Node);

    fn set_text_content(&mut self, node: &Self::Node, text: &str);

    /// Add one class (a single flag) to the node's class list.
    fn add_class(&mut self, node: &Self::Node, class: ClassFlags);

    fn set_style(&mut self, node: &Self::Node, property: StyleProperty, value: &str);

    fn add_listener(&mut self, node: &Self::Node, kind: EventKind, listener: Listener);

    /// Remove `listener` (by identity) from `kind` on `node`. No-op when absent.
    fn remove_listener(&mut self, node: &Self::Node, kind: EventKind, listener: &Listener);
}
