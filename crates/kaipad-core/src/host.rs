//! Capability traits for the document the navigation layer drives.
//!
//! The focus navigator and the scroll synchroniser never touch a rendering
//! surface directly. Everything they need (the focused element, the screen's
//! focusable set, bounding boxes, scroll metrics) comes through these traits,
//! so the algorithms run the same against a browser bridge or an in-memory
//! tree in tests.

use smallvec::SmallVec;

use crate::{ElementInfo, HostError, Instant, Rect, Size, Vec2};

slotmap::new_key_type! {
    /// Handle to an element in the host document.
    pub struct NodeId;
}

/// One element of a [`FocusableSet`] with its traversal index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusEntry {
    pub id: NodeId,
    pub position: usize,
}

/// The current screen's interactive items in document order.
///
/// Positions are contiguous from 0. A set is built fresh for every traversal
/// and must not be kept across navigations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusableSet {
    items: Vec<NodeId>,
}

impl FocusableSet {
    pub fn new(items: Vec<NodeId>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<NodeId> {
        self.items.get(position).copied()
    }

    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.items.iter().position(|&n| n == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = FocusEntry> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(position, &id)| FocusEntry { id, position })
    }
}

/// Structural queries shared by both capabilities.
pub trait NodeTree {
    fn parent(&self, id: NodeId) -> Option<NodeId>;
    fn first_child(&self, id: NodeId) -> Option<NodeId>;
    fn element(&self, id: NodeId) -> Option<ElementInfo>;

    /// Ancestors from the direct parent outwards.
    fn ancestors(&self, id: NodeId) -> SmallVec<[NodeId; 8]> {
        let mut out = SmallVec::new();
        let mut cur = self.parent(id);
        while let Some(p) = cur {
            out.push(p);
            cur = self.parent(p);
        }
        out
    }
}

/// Focus side of the DOM: "focused element" and "interactive elements of the
/// current screen in document order".
pub trait FocusableSetProvider: NodeTree {
    fn active_element(&self) -> Option<NodeId>;
    fn focusable_set(&self) -> FocusableSet;
    fn focus(&mut self, id: NodeId) -> Result<(), HostError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Element(NodeId),
    /// The document viewport.
    Document,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Scroll metrics of a container, in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollBox {
    /// Visible box of the container.
    pub rect: Rect,
    pub client: Size,
    pub content: Size,
    pub offset: Vec2,
    /// Where an in-flight smooth scroll will end up.
    pub pending_top: Option<f32>,
}

impl ScrollBox {
    pub fn overflows(&self) -> bool {
        self.content.height > self.client.height || self.content.width > self.client.width
    }

    pub fn max_top(&self) -> f32 {
        (self.content.height - self.client.height).max(0.0)
    }

    /// The vertical offset the container is at, or is heading to.
    pub fn effective_top(&self) -> f32 {
        self.pending_top.unwrap_or(self.offset.y)
    }
}

/// Geometry side of the DOM: bounding boxes and scroll containers.
pub trait ScrollableAncestorResolver: NodeTree {
    /// Bounding box of `id` in viewport coordinates, scroll applied.
    fn bounding_rect(&self, id: NodeId) -> Option<Rect>;

    /// Metrics for an element container, or the document. Elements that are
    /// not scroll containers return `None`.
    fn scroll_box(&self, target: ScrollTarget) -> Option<ScrollBox>;

    fn scroll_to(
        &mut self,
        target: ScrollTarget,
        top: f32,
        behavior: ScrollBehavior,
    ) -> Result<(), HostError>;

    /// Time of the event about to be handled. Smooth scrolls started while
    /// handling it ease from this instant. Hosts whose scrolling keeps its own
    /// time ignore it.
    fn set_now(&mut self, _now: Instant) {}

    /// First ancestor whose content overflows its box, else the document.
    fn scrollable_ancestor(&self, id: NodeId) -> ScrollTarget {
        self.ancestors(id)
            .into_iter()
            .find(|&a| {
                self.scroll_box(ScrollTarget::Element(a))
                    .is_some_and(|b| b.overflows())
            })
            .map(ScrollTarget::Element)
            .unwrap_or(ScrollTarget::Document)
    }
}

/// Everything the navigation layer needs from a document.
pub trait Dom: FocusableSetProvider + ScrollableAncestorResolver {}
impl<T> Dom for T where T: FocusableSetProvider + ScrollableAncestorResolver {}
