//! Collaborators the runner drives but does not own.

use crate::state::GeoPoint;

/// Map collaborator. Only called on `/map*` routes.
pub trait MapControl {
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
}

/// Window/process collaborator.
pub trait WindowControl {
    fn close(&mut self);
}

/// A `WindowControl` that only records close requests, for hosts that tear
/// down on their own schedule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CloseLatch {
    pub requests: u32,
}

impl CloseLatch {
    pub fn is_closed(&self) -> bool {
        self.requests > 0
    }
}

impl WindowControl for CloseLatch {
    fn close(&mut self) {
        self.requests += 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalDir {
    Left,
    Right,
}

/// Reserved extension points. The defaults do nothing.
pub trait ExtensionHooks {
    /// Pull-to-refresh at the top of the page.
    fn refresh(&mut self) {}
    /// Left/right on the result list.
    fn switch_category(&mut self, _dir: HorizontalDir) {}
}

/// Hooks that ignore everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;
impl ExtensionHooks for NoHooks {}

/// Map state behind a `MapControl`: centre and a zoom level clamped to the
/// tile server's range. Zooming before the map exists is a no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct MapViewport {
    pub center: Option<GeoPoint>,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            center: None,
            zoom: 13,
            min_zoom: 1,
            max_zoom: 19,
        }
    }
}

impl MapViewport {
    pub fn centered(at: GeoPoint) -> Self {
        Self {
            center: Some(at),
            ..Self::default()
        }
    }

    pub fn is_ready(&self) -> bool {
        self.center.is_some()
    }
}

impl MapControl for MapViewport {
    fn zoom_in(&mut self) {
        if self.is_ready() {
            self.zoom = self.zoom.saturating_add(1).min(self.max_zoom);
        }
    }

    fn zoom_out(&mut self) {
        if self.is_ready() {
            self.zoom = self.zoom.saturating_sub(1).max(self.min_zoom);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut map = MapViewport::centered(GeoPoint::new(47.26, 11.39));
        map.zoom_in();
        assert_eq!(map.zoom, 14);
        map.zoom = 19;
        map.zoom_in();
        assert_eq!(map.zoom, 19);
        map.zoom = 1;
        map.zoom_out();
        assert_eq!(map.zoom, 1);
    }

    #[test]
    fn test_zoom_before_map_exists() {
        let mut map = MapViewport::default();
        map.zoom_in();
        assert_eq!(map.zoom, 13);
    }
}
