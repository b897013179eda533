//! Element Registry - the surface the engine drives.
//!
//! Combines the handle table, the codec and the event bridge over a host
//! [`Dom`]. One registry serves one mount container for one session.
//!
//! Every operation is fail-soft:
//! - Unknown tags degrade to containers, unknown class tokens are ignored;
//!   both log a warning
//! - Removing a free or out-of-range handle does nothing
//! - Stale handles in mutations are logged at debug level and ignored
//! - Payloads that do not fit engine memory are logged and skipped

use spark_signals::{signal, Signal};

use crate::codec::{self, U32View};
use crate::config::RegistryConfig;
use crate::dom::Dom;
use crate::error::CodecError;
use crate::events::{EventBridge, EventCallback};
use crate::handles::HandleTable;
use crate::memory::EngineMemory;
use crate::types::{
    ClassFlags, EventKind, Handle, INVALID_HANDLE, LayoutClass, StyleProperty, Tag,
};

/// Handle-based element registry over a host tree `D`, reading payloads
/// from engine memory `M`.
pub struct Registry<D: Dom, M: EngineMemory> {
    dom: D,
    mount: D::Node,
    memory: M,
    callback: EventCallback,
    config: RegistryConfig,
    table: HandleTable<D::Node>,
    events: EventBridge,
    generation: Signal<u32>,
}

impl<D: Dom, M: EngineMemory> Registry<D, M> {
    pub fn new(dom: D, mount: D::Node, memory: M, callback: EventCallback) -> Self {
        Self::with_config(dom, mount, memory, callback, RegistryConfig::default())
    }

    pub fn with_config(
        dom: D,
        mount: D::Node,
        memory: M,
        callback: EventCallback,
        config: RegistryConfig,
    ) -> Self {
        Self {
            dom,
            mount,
            memory,
            callback,
            config,
            table: HandleTable::new(),
            events: EventBridge::new(config.hover_event()),
            generation: signal(0),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn mount(&self) -> &D::Node {
        &self.mount
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Host node behind a live handle.
    pub fn node(&self, handle: Handle) -> Option<&D::Node> {
        self.table.get(handle)
    }

    pub fn is_live(&self, handle: Handle) -> bool {
        self.table.is_live(handle)
    }

    pub fn live_count(&self) -> usize {
        self.table.live_count()
    }

    /// Free handles in reuse order (last is reused first).
    pub fn free_handles(&self) -> &[Handle] {
        self.table.free_handles()
    }

    /// Event kind hover handlers are bound to.
    pub fn hover_event(&self) -> EventKind {
        self.events.hover.kind()
    }

    /// Number of completed `begin_render` calls.
    pub fn generation(&self) -> u32 {
        self.generation.get()
    }

    /// Reactive view of [`generation`](Self::generation), for hosts that
    /// react to renders (snapshotting, repainting) from a signal effect
    /// instead of polling.
    pub fn generation_signal(&self) -> Signal<u32> {
        self.generation.clone()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn live(&self, handle: Handle, op: &str) -> Option<D::Node> {
        let node = self.table.get(handle).cloned();
        if node.is_none() {
            log::debug!("{op}: ignoring handle {handle}, not live");
        }
        node
    }

    fn read<T>(&self, op: &str, decode: impl FnOnce(&[u8]) -> Result<T, CodecError>) -> Option<T> {
        match self.memory.with_bytes(decode) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("{op}: {err}");
                None
            }
        }
    }

    fn read_u32s<T>(
        &self,
        op: &str,
        offset: u32,
        count: usize,
        build: impl FnOnce(&U32View<'_>) -> T,
    ) -> Option<T> {
        self.read(op, |bytes| {
            let view = codec::decode_u32_array(bytes, offset as usize, count)?;
            Ok(build(&view))
        })
    }

    // =========================================================================
    // Render Cycle
    // =========================================================================

    /// Start a render cycle: clear the mount container, reset the table and
    /// register the mount as handle 0.
    ///
    /// Every handle issued before this call is invalid afterwards.
    pub fn begin_render(&mut self) -> Handle {
        self.dom.remove_children(&self.mount);
        self.events.clear();
        let root = self.table.reset_with_root(self.mount.clone());
        self.generation.set(self.generation.get().wrapping_add(1));
        log::debug!("render {} begins", self.generation.get());
        root
    }

    /// Release the whole table without touching the tree.
    pub fn end_render(&mut self) {
        self.table.clear();
        self.events.clear();
        log::debug!("render {} ends", self.generation.get());
    }

    // =========================================================================
    // Tree
    // =========================================================================

    /// Create an element for a tag code and return its handle, or
    /// [`INVALID_HANDLE`] when the table is full.
    pub fn create(&mut self, tag: u32) -> Handle {
        let tag = Tag::from_code(tag).unwrap_or_else(|| {
            log::warn!("unknown tag {tag}, rendering component as a container");
            Tag::Container
        });
        let node = self.dom.create_element(tag);
        if self.config.marks_components() {
            self.dom.add_class(&node, ClassFlags::COMPONENT);
        }
        self.table.insert(node).unwrap_or_else(|| {
            log::warn!("create: handle table is full, element dropped");
            INVALID_HANDLE
        })
    }

    /// Detach and release a handle. Free or out-of-range handles are ignored.
    pub fn remove(&mut self, handle: Handle) {
        if let Some(node) = self.table.release(handle) {
            self.dom.detach(&node);
            self.events.forget(handle);
        }
    }

    pub fn append_child(&mut self, parent: Handle, child: Handle) {
        let (Some(parent), Some(child)) = (
            self.live(parent, "append_child"),
            self.live(child, "append_child"),
        ) else {
            return;
        };
        self.dom.append_child(&parent, &child);
    }

    // =========================================================================
    // Attributes & Styles
    // =========================================================================

    /// Replace text content with `length` narrow-decoded bytes at `offset`.
    pub fn set_text(&mut self, handle: Handle, offset: u32, length: u32) {
        let Some(node) = self.live(handle, "set_text") else { return };
        let Some(text) = self.read("set_text", |bytes| {
            codec::decode_narrow(bytes, offset as usize, length as usize)
        }) else {
            return;
        };
        self.dom.set_text_content(&node, &text);
    }

    pub fn add_class(&mut self, handle: Handle, token: u32) {
        let Some(class) = LayoutClass::from_token(token) else {
            log::warn!("unknown class number {token}");
            return;
        };
        let Some(node) = self.live(handle, "add_class") else { return };
        self.dom.add_class(&node, class.flag());
    }

    pub fn set_grid_area(&mut self, handle: Handle, area_id: u32) {
        let Some(node) = self.live(handle, "set_grid_area") else { return };
        let area = codec::encode_area_id(area_id);
        self.dom.set_style(&node, StyleProperty::GridArea, &area);
    }

    /// Apply a `width` x `height` row-major table of area ids.
    pub fn set_grid_template_areas(
        &mut self,
        handle: Handle,
        offset: u32,
        width: u32,
        height: u32,
    ) {
        let op = "set_grid_template_areas";
        let Some(node) = self.live(handle, op) else { return };
        let (width, height) = (width as usize, height as usize);
        let Some(count) = width.checked_mul(height) else {
            log::warn!("{op}: {width}x{height} template is too large");
            return;
        };
        let Some(template) = self.read_u32s(op, offset, count, |ids| {
            codec::grid_template_areas(ids, width, height)
        }) else {
            return;
        };
        self.dom.set_style(&node, StyleProperty::GridTemplateAreas, &template);
    }

    pub fn set_grid_template_rows(&mut self, handle: Handle, offset: u32, count: u32) {
        self.set_tracks(handle, offset, count, StyleProperty::GridTemplateRows);
    }

    pub fn set_grid_template_columns(&mut self, handle: Handle, offset: u32, count: u32) {
        self.set_tracks(handle, offset, count, StyleProperty::GridTemplateColumns);
    }

    fn set_tracks(&mut self, handle: Handle, offset: u32, count: u32, property: StyleProperty) {
        let op = property.css_name();
        let Some(node) = self.live(handle, op) else { return };
        let Some(tracks) = self.read_u32s(op, offset, count as usize, |weights| {
            codec::fr_tracks(weights.iter())
        }) else {
            return;
        };
        self.dom.set_style(&node, property, &tracks);
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn set_click_handler(&mut self, handle: Handle, code: u32) {
        let Some(node) = self.live(handle, "set_click_handler") else { return };
        self.events
            .click
            .set(&mut self.dom, handle, &node, &self.callback, code);
    }

    /// Detach the tracked click listener. `code` does not select among
    /// listeners; only one is tracked per handle.
    pub fn remove_click_handler(&mut self, handle: Handle, _code: u32) {
        let Some(node) = self.live(handle, "remove_click_handler") else { return };
        self.events.click.remove(&mut self.dom, handle, &node);
    }

    pub fn set_hover_handler(&mut self, handle: Handle, code: u32) {
        let Some(node) = self.live(handle, "set_hover_handler") else { return };
        self.events
            .hover
            .set(&mut self.dom, handle, &node, &self.callback, code);
    }

    /// Detach the tracked hover listener from the hover event.
    pub fn remove_hover_handler(&mut self, handle: Handle, _code: u32) {
        let Some(node) = self.live(handle, "remove_hover_handler") else { return };
        self.events.hover.remove(&mut self.dom, handle, &node);
    }
}

impl<D: Dom, M: EngineMemory> std::fmt::Debug for Registry<D, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("live", &self.table.live_count())
            .field("free", &self.table.free_handles())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryFlags;
    use crate::headless::{HeadlessDom, NodeId};
    use crate::memory::SharedMemory;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Fixture {
        registry: Registry<HeadlessDom, SharedMemory>,
        memory: SharedMemory,
        codes: Rc<RefCell<Vec<u32>>>,
    }

    fn setup_with(config: RegistryConfig) -> Fixture {
        let mut dom = HeadlessDom::new();
        let mount = dom.create_mount();
        let memory = SharedMemory::with_len(256);
        let codes = Rc::new(RefCell::new(Vec::new()));
        let sink = codes.clone();
        let callback: EventCallback = Rc::new(move |code| sink.borrow_mut().push(code));
        let registry = Registry::with_config(dom, mount, memory.clone(), callback, config);
        Fixture { registry, memory, codes }
    }

    fn setup() -> Fixture {
        setup_with(RegistryConfig::default())
    }

    fn node(fx: &Fixture, handle: Handle) -> NodeId {
        *fx.registry.node(handle).unwrap()
    }

    // -------------------------------------------------------------------------
    // Handles
    // -------------------------------------------------------------------------

    #[test]
    fn test_begin_render_returns_root() {
        let mut fx = setup();
        assert_eq!(fx.registry.begin_render(), 0);
        assert_eq!(fx.registry.live_count(), 1);
        assert_eq!(fx.registry.node(0), Some(fx.registry.mount()));
    }

    #[test]
    fn test_begin_render_resets_tree_and_table() {
        let mut fx = setup();
        let root = fx.registry.begin_render();
        let a = fx.registry.create(1);
        let b = fx.registry.create(1);
        fx.registry.append_child(root, a);
        fx.registry.remove(b);

        assert_eq!(fx.registry.begin_render(), 0);
        assert_eq!(fx.registry.live_count(), 1);
        assert!(fx.registry.free_handles().is_empty());
        let mount = *fx.registry.mount();
        assert!(fx.registry.dom().children(mount).is_empty());

        // Numbering restarts after the root
        assert_eq!(fx.registry.create(1), 1);
    }

    #[test]
    fn test_handle_reuse_is_lifo() {
        let mut fx = setup();
        fx.registry.begin_render();
        for _ in 0..5 {
            fx.registry.create(1);
        }

        fx.registry.remove(2);
        fx.registry.remove(5);

        assert_eq!(fx.registry.create(2), 5);
        assert_eq!(fx.registry.create(2), 2);
    }

    #[test]
    fn test_double_remove_is_noop() {
        let mut fx = setup();
        fx.registry.begin_render();
        let a = fx.registry.create(1);

        fx.registry.remove(a);
        fx.registry.remove(a);
        fx.registry.remove(99);

        assert_eq!(fx.registry.free_handles(), &[a]);
        assert!(!fx.registry.is_live(a));
    }

    #[test]
    fn test_remove_detaches_node() {
        let mut fx = setup();
        let root = fx.registry.begin_render();
        let a = fx.registry.create(1);
        fx.registry.append_child(root, a);
        let a_node = node(&fx, a);

        fx.registry.remove(a);

        let mount = *fx.registry.mount();
        assert!(fx.registry.dom().children(mount).is_empty());
        assert_eq!(fx.registry.dom().parent(a_node), None);
    }

    #[test]
    fn test_end_render_keeps_tree() {
        let mut fx = setup();
        let root = fx.registry.begin_render();
        let a = fx.registry.create(2);
        fx.registry.append_child(root, a);
        let a_node = node(&fx, a);

        fx.registry.end_render();

        assert_eq!(fx.registry.live_count(), 0);
        assert!(!fx.registry.is_live(root));
        let mount = *fx.registry.mount();
        assert_eq!(fx.registry.dom().children(mount), &[a_node]);
    }

    #[test]
    fn test_append_child_is_last() {
        let mut fx = setup();
        let root = fx.registry.begin_render();
        let parent = fx.registry.create(1);
        let first = fx.registry.create(2);
        let second = fx.registry.create(3);
        fx.registry.append_child(root, parent);
        fx.registry.append_child(parent, first);
        fx.registry.append_child(parent, second);

        let parent_node = node(&fx, parent);
        let children = fx.registry.dom().children(parent_node);
        assert_eq!(children.last(), Some(&node(&fx, second)));
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_stale_handle_is_ignored() {
        let mut fx = setup();
        let root = fx.registry.begin_render();
        let a = fx.registry.create(1);
        fx.registry.remove(a);

        fx.registry.append_child(root, a);
        fx.registry.set_grid_area(a, 3);
        fx.registry.set_click_handler(a, 1);

        let mount = *fx.registry.mount();
        assert!(fx.registry.dom().children(mount).is_empty());
    }

    #[test]
    fn test_append_into_descendant_leaves_tree_intact() {
        let mut fx = setup();
        let root = fx.registry.begin_render();
        let a = fx.registry.create(1);
        let b = fx.registry.create(1);
        fx.registry.append_child(root, a);
        fx.registry.append_child(a, b);

        fx.registry.append_child(b, a);
        fx.registry.append_child(a, a);
        fx.registry.append_child(b, root);

        let mount = *fx.registry.mount();
        let (a_node, b_node) = (node(&fx, a), node(&fx, b));
        let dom = fx.registry.dom();
        assert_eq!(dom.children(mount), &[a_node]);
        assert_eq!(dom.children(a_node), &[b_node]);
        assert!(dom.children(b_node).is_empty());
        assert_eq!(dom.parent(a_node), Some(mount));
        assert_eq!(
            dom.to_markup(mount),
            "<main><div class=\"component\"><div class=\"component\"></div></div></main>"
        );
    }

    #[test]
    fn test_invalid_handle_is_ignored() {
        let mut fx = setup();
        let root = fx.registry.begin_render();

        assert!(!fx.registry.is_live(INVALID_HANDLE));
        fx.registry.append_child(root, INVALID_HANDLE);
        fx.registry.set_click_handler(INVALID_HANDLE, 1);
        fx.registry.remove(INVALID_HANDLE);

        let mount = *fx.registry.mount();
        assert!(fx.registry.dom().children(mount).is_empty());
        assert!(fx.registry.free_handles().is_empty());
    }

    #[test]
    fn test_rerenders_reuse_host_nodes() {
        let mut fx = setup();
        for _ in 0..5 {
            let root = fx.registry.begin_render();
            let button = fx.registry.create(3);
            fx.registry.set_click_handler(button, 1);
            fx.registry.append_child(root, button);
            fx.registry.create(2);
        }

        // The mount, the attached button and the orphaned text.
        assert_eq!(fx.registry.dom().node_count(), 3);
    }

    // -------------------------------------------------------------------------
    // Tags & Classes
    // -------------------------------------------------------------------------

    #[test]
    fn test_create_tags() {
        let mut fx = setup();
        fx.registry.begin_render();
        let p = fx.registry.create(2);
        let button = fx.registry.create(3);
        let unknown = fx.registry.create(77);

        let dom = fx.registry.dom();
        assert_eq!(dom.tag(node(&fx, p)), Some(Tag::Text));
        assert_eq!(dom.tag(node(&fx, button)), Some(Tag::Actionable));
        assert_eq!(dom.tag(node(&fx, unknown)), Some(Tag::Container));
        assert_eq!(dom.classes(node(&fx, p)), ClassFlags::COMPONENT);
    }

    #[test]
    fn test_component_marker_can_be_disabled() {
        let mut fx = setup_with(RegistryConfig::new(RegistryFlags::empty()));
        fx.registry.begin_render();
        let a = fx.registry.create(1);
        assert!(fx.registry.dom().classes(node(&fx, a)).is_empty());
    }

    #[test]
    fn test_add_class() {
        let mut fx = setup();
        fx.registry.begin_render();
        let a = fx.registry.create(1);

        fx.registry.add_class(a, 4);
        fx.registry.add_class(a, 2);
        fx.registry.add_class(a, 9);

        assert_eq!(
            fx.registry.dom().classes(node(&fx, a)),
            ClassFlags::COMPONENT | ClassFlags::GRID | ClassFlags::VERTICAL
        );
    }

    // -------------------------------------------------------------------------
    // Payloads
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_text_narrow() {
        let mut fx = setup();
        fx.registry.begin_render();
        let p = fx.registry.create(2);
        fx.memory.write(10, &[72, 105]).unwrap();

        fx.registry.set_text(p, 10, 2);
        assert_eq!(fx.registry.dom().text(node(&fx, p)), "Hi");

        // Multi-byte UTF-8 comes out one character per byte
        fx.memory.write(20, "é".as_bytes()).unwrap();
        fx.registry.set_text(p, 20, 2);
        assert_eq!(fx.registry.dom().text(node(&fx, p)).chars().count(), 2);
    }

    #[test]
    fn test_set_text_reads_grown_memory() {
        let mut fx = setup();
        fx.registry.begin_render();
        let p = fx.registry.create(2);

        let offset = fx.memory.grow(64);
        fx.memory.write(offset, b"late").unwrap();
        fx.registry.set_text(p, offset as u32, 4);

        assert_eq!(fx.registry.dom().text(node(&fx, p)), "late");
    }

    #[test]
    fn test_set_text_out_of_bounds_is_skipped() {
        let mut fx = setup();
        fx.registry.begin_render();
        let p = fx.registry.create(2);
        fx.memory.write(0, b"ok").unwrap();
        fx.registry.set_text(p, 0, 2);

        fx.registry.set_text(p, 250, 100);
        assert_eq!(fx.registry.dom().text(node(&fx, p)), "ok");
    }

    #[test]
    fn test_grid_styles() {
        let mut fx = setup();
        fx.registry.begin_render();
        let grid = fx.registry.create(1);
        fx.memory.write_u32s(0, &[0, 1, 2, 3]).unwrap();
        fx.memory.write_u32s(32, &[1, 2, 3]).unwrap();

        fx.registry.set_grid_area(grid, 19);
        fx.registry.set_grid_template_areas(grid, 0, 2, 2);
        fx.registry.set_grid_template_rows(grid, 32, 3);
        fx.registry.set_grid_template_columns(grid, 32, 2);

        let dom = fx.registry.dom();
        let n = node(&fx, grid);
        assert_eq!(dom.style(n, StyleProperty::GridArea), Some("bj"));
        assert_eq!(dom.style(n, StyleProperty::GridTemplateAreas), Some("\"a b \"\"c d \""));
        assert_eq!(dom.style(n, StyleProperty::GridTemplateRows), Some("1fr 2fr 3fr "));
        assert_eq!(dom.style(n, StyleProperty::GridTemplateColumns), Some("1fr 2fr "));
    }

    #[test]
    fn test_oversized_template_is_skipped() {
        let mut fx = setup();
        fx.registry.begin_render();
        let grid = fx.registry.create(1);

        fx.registry.set_grid_template_areas(grid, 0, 100, 100);
        fx.registry.set_grid_template_rows(grid, 0, u32::MAX);

        let dom = fx.registry.dom();
        let n = node(&fx, grid);
        assert_eq!(dom.style(n, StyleProperty::GridTemplateAreas), None);
        assert_eq!(dom.style(n, StyleProperty::GridTemplateRows), None);
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    #[test]
    fn test_click_delivers_code_once() {
        let mut fx = setup();
        fx.registry.begin_render();
        let button = fx.registry.create(3);
        fx.registry.set_click_handler(button, 42);

        fx.registry.dom().fire(node(&fx, button), EventKind::Click);
        assert_eq!(*fx.codes.borrow(), vec![42]);
    }

    #[test]
    fn test_remove_click_handler() {
        let mut fx = setup();
        fx.registry.begin_render();
        let button = fx.registry.create(3);
        fx.registry.set_click_handler(button, 42);
        fx.registry.remove_click_handler(button, 0);

        fx.registry.dom().fire(node(&fx, button), EventKind::Click);
        assert!(fx.codes.borrow().is_empty());
    }

    #[test]
    fn test_remove_hover_handler_detaches_hover() {
        let mut fx = setup();
        fx.registry.begin_render();
        let a = fx.registry.create(1);
        fx.registry.set_click_handler(a, 1);
        fx.registry.set_hover_handler(a, 2);

        fx.registry.remove_hover_handler(a, 2);

        let dom = fx.registry.dom();
        let n = node(&fx, a);
        assert_eq!(dom.fire(n, EventKind::MouseOver), 0);
        assert_eq!(dom.fire(n, EventKind::Click), 1);
        assert_eq!(*fx.codes.borrow(), vec![1]);
    }

    #[test]
    fn test_hover_on_enter() {
        let mut fx = setup_with(RegistryConfig::new(
            RegistryFlags::MARK_COMPONENTS | RegistryFlags::HOVER_ON_ENTER,
        ));
        fx.registry.begin_render();
        let a = fx.registry.create(1);
        fx.registry.set_hover_handler(a, 5);

        let dom = fx.registry.dom();
        let n = node(&fx, a);
        assert_eq!(fx.registry.hover_event(), EventKind::PointerEnter);
        assert_eq!(dom.fire(n, EventKind::MouseOver), 0);
        assert_eq!(dom.fire(n, EventKind::PointerEnter), 1);
        assert_eq!(*fx.codes.borrow(), vec![5]);
    }

    #[test]
    fn test_reused_handle_starts_without_handlers() {
        let mut fx = setup();
        fx.registry.begin_render();
        let old = fx.registry.create(3);
        fx.registry.set_click_handler(old, 1);
        let old_node = node(&fx, old);
        fx.registry.remove(old);

        let new = fx.registry.create(3);
        assert_eq!(new, old);
        fx.registry.remove_click_handler(new, 1);

        // The old node keeps its listener; the new one never had any.
        assert_eq!(fx.registry.dom().listener_count(old_node, EventKind::Click), 1);
        assert_eq!(fx.registry.dom().listener_count(node(&fx, new), EventKind::Click), 0);
    }

    #[test]
    fn test_generation_signal() {
        let mut fx = setup();
        let generation = fx.registry.generation_signal();
        assert_eq!(generation.get(), 0);

        fx.registry.begin_render();
        fx.registry.end_render();
        fx.registry.begin_render();

        assert_eq!(fx.registry.generation(), 2);
        assert_eq!(generation.get(), 2);
    }

    #[test]
    fn test_generation_drives_effects() {
        let mut fx = setup();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let generation = fx.registry.generation_signal();
        let _effect = spark_signals::effect(move || {
            sink.borrow_mut().push(generation.get());
        });

        fx.registry.begin_render();
        fx.registry.end_render();
        fx.registry.begin_render();

        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }
}
