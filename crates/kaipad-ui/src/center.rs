//! Scroll synchroniser: keep the focused element vertically centred in its
//! nearest scroll container.

use kaipad_core::*;

/// Ignore corrections smaller than this; also what makes repeated calls settle.
const CENTER_EPSILON: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CenterOutcome {
    /// The container is already at (or heading to) the centred offset.
    AlreadyCentered(ScrollTarget),
    Scrolled {
        target: ScrollTarget,
        from: f32,
        to: f32,
    },
    /// The element has no box, so there is nothing to centre.
    Detached,
}

/// Centre whatever currently has focus.
pub fn center_active<D>(dom: &mut D, behavior: ScrollBehavior) -> CenterOutcome
where
    D: Dom + ?Sized,
{
    match dom.active_element() {
        Some(id) => center_element(dom, id, behavior),
        None => CenterOutcome::Detached,
    }
}

/// Scroll `id`'s nearest scrollable ancestor (or the document) so the
/// element's vertical centre lines up with the container's.
///
/// The computed offset is absolute and clamped, and it is compared against
/// where the container will end up rather than where it is mid-animation, so
/// calling this again on a centred element never moves anything.
pub fn center_element<D>(dom: &mut D, id: NodeId, behavior: ScrollBehavior) -> CenterOutcome
where
    D: ScrollableAncestorResolver + ?Sized,
{
    let Some(rect) = dom.bounding_rect(id) else {
        return CenterOutcome::Detached;
    };
    let target = dom.scrollable_ancestor(id);
    let Some(sbox) = dom.scroll_box(target) else {
        return CenterOutcome::Detached;
    };

    let el_center = match target {
        ScrollTarget::Element(_) => rect.top() - sbox.rect.top() + rect.h / 2.0,
        ScrollTarget::Document => rect.center_y(),
    };
    let delta = el_center - sbox.client.height / 2.0;
    let desired = (sbox.offset.y + delta).clamp(0.0, sbox.max_top());

    if (desired - sbox.effective_top()).abs() < CENTER_EPSILON {
        return CenterOutcome::AlreadyCentered(target);
    }

    if let Err(e) = dom.scroll_to(target, desired, behavior) {
        log::warn!("center: scroll_to {target:?} failed: {e}");
        return CenterOutcome::AlreadyCentered(target);
    }
    log::trace!(
        "center: {target:?} {:.1} -> {desired:.1}",
        sbox.effective_top()
    );
    CenterOutcome::Scrolled {
        target,
        from: sbox.effective_top(),
        to: desired,
    }
}
