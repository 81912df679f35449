//! In-memory element tree.
//!
//! `ElementTree` is a small document model that implements the DOM capability
//! traits from `kaipad_core::host`. Each node has a frame relative to its
//! parent's content origin; scroll containers carry a [`ScrollState`]. The
//! document itself scrolls too, so a bounding rect is the sum of frames minus
//! every enclosing scroll offset, the same as `getBoundingClientRect`.

use kaipad_core::*;
use slotmap::SlotMap;

use crate::scroll::ScrollState;

struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    label: String,
    role: Role,
    flags: ElementFlags,
    tab_index: i32,
    frame: Rect,
    scroll: Option<ScrollState>,
}

/// Description of an element to append.
#[derive(Clone, Debug)]
pub struct ElementSpec {
    pub label: String,
    pub role: Role,
    pub flags: ElementFlags,
    pub tab_index: i32,
    pub frame: Rect,
    pub scrollable: bool,
}

impl ElementSpec {
    pub fn container(label: impl Into<String>, frame: Rect) -> Self {
        Self {
            label: label.into(),
            role: Role::Container,
            flags: ElementFlags::empty(),
            tab_index: -1,
            frame,
            scrollable: false,
        }
    }

    /// A list row in the screen's focusable set.
    pub fn item(label: impl Into<String>, frame: Rect) -> Self {
        Self {
            role: Role::Button,
            flags: ElementFlags::ITEM,
            tab_index: 0,
            ..Self::container(label, frame)
        }
    }

    /// A labelled wrapper around a native field; it is an item itself.
    pub fn input_group(label: impl Into<String>, frame: Rect) -> Self {
        Self {
            flags: ElementFlags::ITEM | ElementFlags::INPUT_PARENT,
            tab_index: 0,
            ..Self::container(label, frame)
        }
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn flags(mut self, flags: ElementFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }

    pub fn scrollable(mut self) -> Self {
        self.scrollable = true;
        self
    }
}

pub struct ElementTree {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    screen: NodeId,
    active: Option<NodeId>,
    viewport: Size,
    document: ScrollState,
    now: Instant,
}

impl ElementTree {
    pub fn new(viewport: Size, now: Instant) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node {
            parent: None,
            children: Vec::new(),
            label: "body".into(),
            role: Role::Container,
            flags: ElementFlags::empty(),
            tab_index: -1,
            frame: Rect::new(0.0, 0.0, viewport.width, viewport.height),
            scroll: None,
        });
        Self {
            nodes,
            root,
            screen: root,
            active: None,
            viewport,
            document: ScrollState::new(viewport.height, viewport.height),
            now,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Restrict the focusable set to the subtree under `screen`.
    pub fn set_screen(&mut self, screen: NodeId) {
        if self.nodes.contains_key(screen) {
            self.screen = screen;
        }
    }

    pub fn append(&mut self, parent: NodeId, spec: ElementSpec) -> Result<NodeId, HostError> {
        if !self.nodes.contains_key(parent) {
            return Err(HostError::UnknownNode(parent));
        }
        let scroll = spec
            .scrollable
            .then(|| ScrollState::new(spec.frame.h, spec.frame.h));
        let id = self.nodes.insert(Node {
            parent: Some(parent),
            children: Vec::new(),
            label: spec.label,
            role: spec.role,
            flags: spec.flags,
            tab_index: spec.tab_index,
            frame: spec.frame,
            scroll,
        });
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(id);
        }
        self.refresh_extent(parent);
        Ok(id)
    }

    /// Remove `id` and its subtree. Focus inside it is dropped.
    pub fn remove(&mut self, id: NodeId) -> Result<(), HostError> {
        if id == self.root {
            return Err(HostError::NotFocusable(id));
        }
        let parent = self
            .nodes
            .get(id)
            .ok_or(HostError::UnknownNode(id))?
            .parent;
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            if let Some(node) = self.nodes.remove(n) {
                stack.extend(node.children);
            }
            if self.active == Some(n) {
                log::debug!("tree: focused node {n:?} removed");
                self.active = None;
            }
        }
        if let Some(p) = parent {
            if let Some(pn) = self.nodes.get_mut(p) {
                pn.children.retain(|&c| c != id);
            }
            self.refresh_extent(p);
        }
        Ok(())
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|n| n.label.as_str())
    }

    pub fn active_label(&self) -> Option<&str> {
        self.active.and_then(|id| self.label(id))
    }

    /// Current vertical offset of a scroll target.
    pub fn scroll_top(&self, target: ScrollTarget) -> Option<f32> {
        match target {
            ScrollTarget::Document => Some(self.document.get()),
            ScrollTarget::Element(id) => self.nodes.get(id)?.scroll.as_ref().map(|s| s.get()),
        }
    }

    /// Advance smooth scrolls to `now`; returns true while any is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.now = now;
        let mut running = self.document.tick(now);
        for (_, node) in self.nodes.iter_mut() {
            if let Some(s) = &mut node.scroll {
                running |= s.tick(now);
            }
        }
        running
    }

    fn is_focusable(node: &Node) -> bool {
        node.flags.intersects(ElementFlags::ITEM | ElementFlags::INPUT_PARENT)
            || node.role != Role::Container
            || node.tab_index >= 0
    }

    /// Recompute the content extent of `id` (or the document for the root).
    fn refresh_extent(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let extent = node
            .children
            .iter()
            .filter_map(|c| self.nodes.get(*c))
            .map(|c| c.frame.bottom())
            .fold(0.0f32, f32::max);
        if id == self.root {
            self.document
                .set_content_height(extent.max(self.viewport.height));
        } else if let Some(s) = self.nodes.get_mut(id).and_then(|n| n.scroll.as_mut()) {
            let h = s.viewport_height();
            s.set_content_height(extent.max(h));
        }
    }

    fn scroll_y(&self, id: NodeId) -> f32 {
        self.nodes
            .get(id)
            .and_then(|n| n.scroll.as_ref())
            .map_or(0.0, |s| s.get())
    }

    fn collect_items(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if node.flags.contains(ElementFlags::ITEM) {
            out.push(id);
        }
        for &c in &node.children {
            self.collect_items(c, out);
        }
    }
}

impl NodeTree for ElementTree {
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.parent
    }

    fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.children.first().copied()
    }

    fn element(&self, id: NodeId) -> Option<ElementInfo> {
        let n = self.nodes.get(id)?;
        Some(ElementInfo {
            role: n.role,
            flags: n.flags,
            tab_index: n.tab_index,
        })
    }
}

impl FocusableSetProvider for ElementTree {
    fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    fn focusable_set(&self) -> FocusableSet {
        let mut items = Vec::new();
        self.collect_items(self.screen, &mut items);
        FocusableSet::new(items)
    }

    fn focus(&mut self, id: NodeId) -> Result<(), HostError> {
        let node = self.nodes.get(id).ok_or(HostError::UnknownNode(id))?;
        if !Self::is_focusable(node) {
            return Err(HostError::NotFocusable(id));
        }
        self.active = Some(id);
        Ok(())
    }
}

impl ScrollableAncestorResolver for ElementTree {
    fn bounding_rect(&self, id: NodeId) -> Option<Rect> {
        let node = self.nodes.get(id)?;
        let mut rect = node.frame;
        for a in self.ancestors(id) {
            let an = self.nodes.get(a)?;
            rect = rect.translate(an.frame.x, an.frame.y - self.scroll_y(a));
        }
        Some(rect.translate(0.0, -self.document.get()))
    }

    fn scroll_box(&self, target: ScrollTarget) -> Option<ScrollBox> {
        match target {
            ScrollTarget::Document => Some(ScrollBox {
                rect: Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height),
                client: self.viewport,
                content: Size::new(self.viewport.width, self.document.content_height()),
                offset: Vec2::new(0.0, self.document.get()),
                pending_top: self.document.pending_target(),
            }),
            ScrollTarget::Element(id) => {
                let node = self.nodes.get(id)?;
                let s = node.scroll.as_ref()?;
                Some(ScrollBox {
                    rect: self.bounding_rect(id)?,
                    client: Size::new(node.frame.w, s.viewport_height()),
                    content: Size::new(node.frame.w, s.content_height()),
                    offset: Vec2::new(0.0, s.get()),
                    pending_top: s.pending_target(),
                })
            }
        }
    }

    fn set_now(&mut self, now: Instant) {
        self.now = self.now.max(now);
    }

    fn scroll_to(
        &mut self,
        target: ScrollTarget,
        top: f32,
        behavior: ScrollBehavior,
    ) -> Result<(), HostError> {
        let now = self.now;
        match target {
            ScrollTarget::Document => self.document.scroll_to(top, behavior, now),
            ScrollTarget::Element(id) => self
                .nodes
                .get_mut(id)
                .ok_or(HostError::UnknownNode(id))?
                .scroll
                .as_mut()
                .ok_or(HostError::NotScrollable(id))?
                .scroll_to(top, behavior, now),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_tree(rows: usize) -> (ElementTree, NodeId, Vec<NodeId>) {
        let clock = TestClock::default();
        let mut tree = ElementTree::new(Size::new(240.0, 320.0), clock.now());
        let list = tree
            .append(
                tree.root(),
                ElementSpec::container("list", Rect::new(0.0, 30.0, 240.0, 260.0)).scrollable(),
            )
            .unwrap();
        let rows = (0..rows)
            .map(|i| {
                tree.append(
                    list,
                    ElementSpec::item(format!("row{i}"), Rect::new(0.0, i as f32 * 50.0, 240.0, 50.0)),
                )
                .unwrap()
            })
            .collect();
        (tree, list, rows)
    }

    #[test]
    fn test_focusable_set_in_document_order() {
        let (tree, _, rows) = list_tree(4);
        let set = tree.focusable_set();
        assert_eq!(set.len(), 4);
        for (i, id) in rows.iter().enumerate() {
            assert_eq!(set.position_of(*id), Some(i));
        }
    }

    #[test]
    fn test_focusable_set_is_live() {
        let (mut tree, _, rows) = list_tree(3);
        tree.focus(rows[1]).unwrap();
        tree.remove(rows[1]).unwrap();
        assert_eq!(tree.focusable_set().len(), 2);
        assert_eq!(tree.active_element(), None);
    }

    #[test]
    fn test_bounding_rect_follows_scroll() {
        let (mut tree, list, rows) = list_tree(10);
        assert_eq!(tree.bounding_rect(rows[2]).unwrap().y, 130.0);

        tree.scroll_to(ScrollTarget::Element(list), 100.0, ScrollBehavior::Instant)
            .unwrap();
        assert_eq!(tree.bounding_rect(rows[2]).unwrap().y, 30.0);
    }

    #[test]
    fn test_scrollable_ancestor() {
        let (tree, list, rows) = list_tree(10);
        assert_eq!(tree.scrollable_ancestor(rows[0]), ScrollTarget::Element(list));

        // Three rows fit in 260px, so the list does not overflow.
        let (short, _, short_rows) = list_tree(3);
        assert_eq!(short.scrollable_ancestor(short_rows[0]), ScrollTarget::Document);
    }

    #[test]
    fn test_smooth_scroll_starts_at_event_time() {
        let clock = TestClock::default();
        let (mut tree, list, _) = list_tree(20);
        let target = ScrollTarget::Element(list);

        // Idle for a second with no frames, then an event scrolls.
        tree.set_now(clock.advance_ms(1000));
        tree.scroll_to(target, 300.0, ScrollBehavior::Smooth).unwrap();

        tree.tick(clock.advance_ms(16));
        let top = tree.scroll_top(target).unwrap();
        assert!(top > 0.0 && top < 300.0, "top = {top}");

        tree.tick(clock.advance_ms(200));
        assert_eq!(tree.scroll_top(target), Some(300.0));
    }

    #[test]
    fn test_containers_are_not_focusable() {
        let (mut tree, list, _) = list_tree(2);
        assert_eq!(tree.focus(list), Err(HostError::NotFocusable(list)));
        let root = tree.root();
        assert!(tree.scroll_to(ScrollTarget::Element(root), 10.0, ScrollBehavior::Instant).is_err());
    }
}
