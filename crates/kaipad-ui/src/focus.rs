//! Focus navigator: vertical traversal over the screen's focusable set.

use kaipad_core::*;

use crate::center::{CenterOutcome, center_active};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NavigateOptions {
    /// Volume interaction mode: arrows belong to the volume control.
    pub volume_mode: bool,
    /// Pixels a focused `.scroll` region moves before traversal.
    pub scroll_nudge: f32,
    pub behavior: ScrollBehavior,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self {
            volume_mode: false,
            scroll_nudge: 10.0,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FocusOutcome {
    /// A native control (or volume mode) owns the arrow keys.
    Blocked,
    /// Nothing on screen can take focus.
    Empty,
    /// Focus left a field for its enclosing input group.
    Delegated {
        group: NodeId,
        center: CenterOutcome,
    },
    Moved {
        from: Option<usize>,
        to: usize,
        id: NodeId,
        center: CenterOutcome,
    },
    /// The host refused the focus request.
    Unchanged,
}

/// Move focus one step in `dir`, wrapping at both ends, then centre the newly
/// focused element.
pub fn navigate<D>(dom: &mut D, dir: Direction, opts: NavigateOptions) -> FocusOutcome
where
    D: Dom + ?Sized,
{
    let active = dom.active_element();
    let info = active.and_then(|id| dom.element(id));

    if opts.volume_mode || info.is_some_and(|i| i.role.owns_arrow_keys()) {
        log::debug!("navigate {dir:?}: blocked");
        return FocusOutcome::Blocked;
    }

    if let (Some(id), Some(info)) = (active, info)
        && info.flags.contains(ElementFlags::SCROLL)
    {
        nudge(dom, id, dir.step() as f32 * opts.scroll_nudge);
    }

    if let Some(group) = active
        .and_then(|id| dom.parent(id))
        .filter(|&p| dom.element(p).is_some_and(|i| i.is_input_group()))
    {
        if let Err(e) = dom.focus(group) {
            log::warn!("navigate {dir:?}: cannot focus input group: {e}");
            return FocusOutcome::Unchanged;
        }
        let center = center_active(dom, opts.behavior);
        return FocusOutcome::Delegated { group, center };
    }

    let set = dom.focusable_set();
    if set.is_empty() {
        return FocusOutcome::Empty;
    }

    let len = set.len() as isize;
    let from = active.and_then(|id| set.position_of(id));
    let to = match (from, dir) {
        (Some(i), _) => (i as isize + dir.step()).rem_euclid(len) as usize,
        (None, Direction::Down) => 0,
        (None, Direction::Up) => set.len() - 1,
    };
    let Some(id) = set.get(to) else {
        return FocusOutcome::Empty;
    };

    if let Err(e) = dom.focus(id) {
        log::warn!("navigate {dir:?}: focus {to} rejected: {e}");
        return FocusOutcome::Unchanged;
    }
    log::trace!("navigate {dir:?}: {from:?} -> {to}");
    let center = center_active(dom, opts.behavior);
    FocusOutcome::Moved {
        from,
        to,
        id,
        center,
    }
}

/// Enter on an input group hands focus to the field inside it.
pub fn enter_input_group<D>(dom: &mut D, behavior: ScrollBehavior) -> Option<NodeId>
where
    D: Dom + ?Sized,
{
    let group = dom.active_element()?;
    if !dom.element(group)?.is_input_group() {
        return None;
    }
    let field = dom.first_child(group)?;
    if let Err(e) = dom.focus(field) {
        log::warn!("enter: cannot focus field of input group: {e}");
        return None;
    }
    center_active(dom, behavior);
    Some(field)
}

fn nudge<D>(dom: &mut D, id: NodeId, dy: f32)
where
    D: Dom + ?Sized,
{
    let target = ScrollTarget::Element(id);
    let Some(sbox) = dom.scroll_box(target) else {
        return;
    };
    let top = (sbox.offset.y + dy).clamp(0.0, sbox.max_top());
    if let Err(e) = dom.scroll_to(target, top, ScrollBehavior::Instant) {
        log::warn!("navigate: nudge failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{ElementSpec, ElementTree};

    fn screen(rows: usize) -> (ElementTree, Vec<NodeId>) {
        let mut tree = ElementTree::new(Size::new(240.0, 320.0), TestClock::default().now());
        let app = tree
            .append(
                tree.root(),
                ElementSpec::container("app", Rect::new(0.0, 0.0, 240.0, 320.0)).scrollable(),
            )
            .unwrap();
        tree.set_screen(app);
        let rows = (0..rows)
            .map(|i| {
                tree.append(
                    app,
                    ElementSpec::item(format!("row{i}"), Rect::new(0.0, i as f32 * 60.0, 240.0, 60.0))
                        .tab_index(i as i32),
                )
                .unwrap()
            })
            .collect();
        (tree, rows)
    }

    fn instant() -> NavigateOptions {
        NavigateOptions {
            behavior: ScrollBehavior::Instant,
            ..Default::default()
        }
    }

    #[test]
    fn test_down_moves_to_next() {
        let (mut tree, rows) = screen(5);
        tree.focus(rows[2]).unwrap();
        let out = navigate(&mut tree, Direction::Down, instant());
        assert!(matches!(out, FocusOutcome::Moved { from: Some(2), to: 3, .. }));
        assert_eq!(tree.active_element(), Some(rows[3]));
        assert_eq!(tree.element(rows[3]).unwrap().tab_index, 3);
    }

    #[test]
    fn test_wraps_both_ways() {
        let (mut tree, rows) = screen(4);
        tree.focus(rows[3]).unwrap();
        navigate(&mut tree, Direction::Down, instant());
        assert_eq!(tree.active_element(), Some(rows[0]));
        navigate(&mut tree, Direction::Up, instant());
        assert_eq!(tree.active_element(), Some(rows[3]));
    }

    #[test]
    fn test_nothing_focused_enters_at_ends() {
        let (mut tree, rows) = screen(4);
        navigate(&mut tree, Direction::Down, instant());
        assert_eq!(tree.active_element(), Some(rows[0]));

        let (mut tree, rows) = screen(4);
        navigate(&mut tree, Direction::Up, instant());
        assert_eq!(tree.active_element(), Some(rows[3]));
    }

    #[test]
    fn test_empty_set_is_noop() {
        let (mut tree, _) = screen(0);
        assert_eq!(navigate(&mut tree, Direction::Down, instant()), FocusOutcome::Empty);
        assert_eq!(tree.active_element(), None);
    }

    #[test]
    fn test_native_controls_block() {
        let (mut tree, rows) = screen(3);
        let select = tree
            .append(
                rows[1],
                ElementSpec::container("select", Rect::new(0.0, 0.0, 100.0, 30.0))
                    .role(Role::Select),
            )
            .unwrap();
        tree.focus(select).unwrap();
        assert_eq!(navigate(&mut tree, Direction::Down, instant()), FocusOutcome::Blocked);
        assert_eq!(tree.active_element(), Some(select));

        tree.focus(rows[0]).unwrap();
        let volume = NavigateOptions {
            volume_mode: true,
            ..instant()
        };
        assert_eq!(navigate(&mut tree, Direction::Down, volume), FocusOutcome::Blocked);
    }

    #[test]
    fn test_field_in_group_returns_to_group() {
        let (mut tree, rows) = screen(3);
        let app = tree.parent(rows[0]).unwrap();
        let group = tree
            .append(app, ElementSpec::input_group("search", Rect::new(0.0, 180.0, 240.0, 60.0)))
            .unwrap();
        let field = tree
            .append(
                group,
                ElementSpec::container("search-field", Rect::new(4.0, 20.0, 230.0, 30.0))
                    .role(Role::Input(InputType::Search)),
            )
            .unwrap();
        tree.focus(group).unwrap();

        assert_eq!(enter_input_group(&mut tree, ScrollBehavior::Instant), Some(field));
        assert_eq!(tree.active_element(), Some(field));

        let out = navigate(&mut tree, Direction::Down, instant());
        assert!(matches!(out, FocusOutcome::Delegated { group: g, .. } if g == group));
        assert_eq!(tree.active_element(), Some(group));

        // From the group itself traversal resumes; it is the last item.
        navigate(&mut tree, Direction::Down, instant());
        assert_eq!(tree.active_element(), Some(rows[0]));
    }

    #[test]
    fn test_enter_outside_group_is_noop() {
        let (mut tree, rows) = screen(2);
        tree.focus(rows[0]).unwrap();
        assert_eq!(enter_input_group(&mut tree, ScrollBehavior::Instant), None);
        assert_eq!(tree.active_element(), Some(rows[0]));
    }

    #[test]
    fn test_scroll_region_is_nudged() {
        let (mut tree, rows) = screen(2);
        let app = tree.parent(rows[0]).unwrap();
        let text = tree
            .append(
                app,
                ElementSpec::container("text", Rect::new(0.0, 120.0, 240.0, 100.0))
                    .flags(ElementFlags::ITEM | ElementFlags::SCROLL)
                    .tab_index(2)
                    .scrollable(),
            )
            .unwrap();
        tree.append(
            text,
            ElementSpec::container("body", Rect::new(0.0, 0.0, 240.0, 400.0)),
        )
        .unwrap();
        tree.focus(text).unwrap();

        navigate(&mut tree, Direction::Down, instant());
        assert_eq!(tree.scroll_top(ScrollTarget::Element(text)), Some(10.0));
        assert_eq!(tree.active_element(), Some(rows[0]));
    }
}
