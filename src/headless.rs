//! Headless Dom - an in-memory presentation tree.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Detached nodes are
//! kept while the engine may still re-attach them. Clearing a mount (what
//! `begin_render` does) reclaims every node no mount can reach, and later
//! nodes reuse those slots. A `NodeId` held across that point may name a
//! different node.
//!
//! Used by the test suites and for markup snapshots of what an engine built:
//!
//! ```text
//! <div class="component grid" style="grid-template-rows: 1fr 2fr ">
//!   <p class="component">Hi</p>
//! </div>
//! ```

use crate::dom::{Dom, Listener};
use crate::types::{ClassFlags, EventKind, StyleProperty, Tag};

/// Arena index of a headless node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

struct NodeData {
    /// `None` for mount containers, which are not registry elements.
    tag: Option<Tag>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: String,
    classes: ClassFlags,
    styles: Vec<(StyleProperty, String)>,
    listeners: Vec<(EventKind, Listener)>,
}

impl NodeData {
    fn new(tag: Option<Tag>) -> Self {
        Self {
            tag,
            parent: None,
            children: Vec::new(),
            text: String::new(),
            classes: ClassFlags::empty(),
            styles: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

/// In-memory [`Dom`].
#[derive(Default)]
pub struct HeadlessDom {
    nodes: Vec<NodeData>,
    free: Vec<NodeId>,
}

impl std::fmt::Debug for HeadlessDom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessDom")
            .field("nodes", &self.nodes.len())
            .field("free", &self.free.len())
            .finish()
    }
}

impl HeadlessDom {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.nodes[id.index()] = data;
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(data);
        id
    }

    /// Is `node` equal to `ancestor` or somewhere below it?
    fn is_inclusive_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.node(id).parent;
        }
        false
    }

    /// Free every node that no mount reaches. Mounts themselves are kept.
    fn reclaim_unreachable(&mut self) {
        let mut reachable = vec![false; self.nodes.len()];
        for id in &self.free {
            // Already free; leave them out of both passes.
            reachable[id.index()] = true;
        }
        let mut stack: Vec<NodeId> = (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| !reachable[id.index()] && self.node(*id).tag.is_none())
            .collect();
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut reachable[id.index()], true) {
                continue;
            }
            stack.extend_from_slice(&self.node(id).children);
        }

        let before = self.free.len();
        for (index, &seen) in reachable.iter().enumerate() {
            if !seen {
                self.nodes[index] = NodeData::new(None);
                self.free.push(NodeId(index));
            }
        }
        // A mount may have been appended under a node that is now gone.
        for node in &mut self.nodes {
            if node.parent.is_some_and(|p| !reachable[p.index()]) {
                node.parent = None;
            }
        }
        // Lowest index comes back first.
        self.free.sort_unstable_by(|a, b| b.index().cmp(&a.index()));
        log::trace!("reclaimed {} headless nodes", self.free.len() - before);
    }

    /// Create a mount container (rendered as `<main>`).
    pub fn create_mount(&mut self) -> NodeId {
        self.push(NodeData::new(None))
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.index()]
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Nodes currently allocated, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn tag(&self, id: NodeId) -> Option<Tag> {
        self.node(id).tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    pub fn classes(&self, id: NodeId) -> ClassFlags {
        self.node(id).classes
    }

    pub fn style(&self, id: NodeId, property: StyleProperty) -> Option<&str> {
        self.node(id)
            .styles
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, value)| value.as_str())
    }

    /// Listeners attached to `kind`, in attachment order.
    ///
    /// Returned as clones so the caller can release its borrow of the
    /// document before invoking them; a listener may re-enter the registry.
    pub fn listeners(&self, id: NodeId, kind: EventKind) -> Vec<Listener> {
        self.node(id)
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, listener)| listener.clone())
            .collect()
    }

    pub fn listener_count(&self, id: NodeId, kind: EventKind) -> usize {
        self.node(id)
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Simulate an interaction: invoke every `kind` listener on the node.
    /// Returns how many ran.
    pub fn fire(&self, id: NodeId, kind: EventKind) -> usize {
        let listeners = self.listeners(id, kind);
        for listener in &listeners {
            listener();
        }
        listeners.len()
    }

    // =========================================================================
    // Markup
    // =========================================================================

    /// Render the subtree rooted at `id` as compact markup.
    pub fn to_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(id, &mut out);
        out
    }

    fn write_markup(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        let name = node.tag.map_or("main", Tag::element_name);

        out.push('<');
        out.push_str(name);
        if !node.classes.is_empty() {
            let classes: Vec<_> = node.classes.names().collect();
            out.push_str(" class=\"");
            out.push_str(&classes.join(" "));
            out.push('"');
        }
        if !node.styles.is_empty() {
            let styles: Vec<_> = node
                .styles
                .iter()
                .map(|(property, value)| format!("{}: {}", property.css_name(), escape(value)))
                .collect();
            out.push_str(" style=\"");
            out.push_str(&styles.join("; "));
            out.push('"');
        }
        out.push('>');
        out.push_str(&escape(&node.text));
        for &child in &node.children {
            self.write_markup(child, out);
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// =============================================================================
// Dom implementation
// =============================================================================

impl Dom for HeadlessDom {
    type Node = NodeId;

    fn create_element(&mut self, tag: Tag) -> NodeId {
        self.push(NodeData::new(Some(tag)))
    }

    /// Clearing a mount also reclaims every node left unreachable.
    fn remove_children(&mut self, node: &NodeId) {
        let children = std::mem::take(&mut self.node_mut(*node).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
        if self.node(*node).tag.is_none() {
            self.reclaim_unreachable();
        }
    }

    /// Appending a node under itself or one of its descendants is refused.
    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        if self.is_inclusive_descendant(*parent, *child) {
            log::warn!("append_child: {child:?} is an ancestor of {parent:?}, not appending");
            return;
        }
        self.detach(child);
        self.node_mut(*parent).children.push(*child);
        self.node_mut(*child).parent = Some(*parent);
    }

    fn detach(&mut self, node: &NodeId) {
        let Some(parent) = self.node_mut(*node).parent.take() else {
            return;
        };
        self.node_mut(parent).children.retain(|c| c != node);
    }

    fn set_text_content(&mut self, node: &NodeId, text: &str) {
        // Text replaces children, as with a host's textContent.
        self.remove_children(node);
        self.node_mut(*node).text = text.to_string();
    }

    fn add_class(&mut self, node: &NodeId, class: ClassFlags) {
        self.node_mut(*node).classes |= class;
    }

    fn set_style(&mut self, node: &NodeId, property: StyleProperty, value: &str) {
        let styles = &mut self.node_mut(*node).styles;
        match styles.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => styles.push((property, value.to_string())),
        }
    }

    fn add_listener(&mut self, node: &NodeId, kind: EventKind, listener: Listener) {
        let listeners = &mut self.node_mut(*node).listeners;
        // Adding the same listener twice is a no-op.
        if !listeners.iter().any(|(k, l)| *k == kind && std::rc::Rc::ptr_eq(l, &listener)) {
            listeners.push((kind, listener));
        }
    }

    fn remove_listener(&mut self, node: &NodeId, kind: EventKind, listener: &Listener) {
        self.node_mut(*node)
            .listeners
            .retain(|(k, l)| !(*k == kind && std::rc::Rc::ptr_eq(l, listener)));
    }
}
