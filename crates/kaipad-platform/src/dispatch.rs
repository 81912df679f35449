//! Action dispatcher: (resolved key, route) → action.
//!
//! Everything here is a pure function of its inputs. Unmatched combinations
//! map to [`Action::None`]; that is the normal case, not an error.

use kaipad_core::{Key, SwipeDirection, SwipeGesture};
use kaipad_navigation::{Route, routes};
use kaipad_ui::Direction;

use crate::collab::HorizontalDir;
use crate::state::GeoPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zoom {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extension {
    Refresh,
    SwitchCategory(HorizontalDir),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    None,
    MoveFocus(Direction),
    Navigate(Route),
    ZoomMap(Zoom),
    /// Focus the field inside the focused input group.
    EnterInputGroup,
    Back,
    CloseWindow,
    Extension(Extension),
}

/// What the dispatcher may look at besides the key.
#[derive(Clone, Copy, Debug)]
pub struct DispatchContext<'a> {
    pub route: &'a Route,
    pub active_is_input_group: bool,
    pub first_result: Option<GeoPoint>,
    pub current_article: Option<GeoPoint>,
}

impl<'a> DispatchContext<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self {
            route,
            active_is_input_group: false,
            first_result: None,
            current_article: None,
        }
    }
}

fn map_view_at(p: GeoPoint) -> Action {
    Action::Navigate(
        Route::new(routes::MAP_VIEW)
            .with_param("lat", p.lat)
            .with_param("lng", p.lng),
    )
}

pub fn dispatch_short(key: &Key, cx: &DispatchContext<'_>) -> Action {
    let on = |prefix: &str| cx.route.starts_with(prefix);
    match key {
        Key::ArrowUp => Action::MoveFocus(Direction::Up),
        Key::ArrowDown => Action::MoveFocus(Direction::Down),
        Key::ArrowLeft if on(routes::START) => {
            Action::Extension(Extension::SwitchCategory(HorizontalDir::Left))
        }
        Key::ArrowRight if on(routes::START) => {
            Action::Extension(Extension::SwitchCategory(HorizontalDir::Right))
        }
        Key::SoftRight | Key::Alt if on(routes::START) => {
            Action::Navigate(Route::new(routes::OPTIONS))
        }
        Key::SoftRight | Key::Alt if on(routes::MAP) => Action::ZoomMap(Zoom::In),
        Key::SoftLeft | Key::Control if on(routes::MAP) => Action::ZoomMap(Zoom::Out),
        Key::SoftLeft | Key::Control if on(routes::START) => match cx.first_result {
            Some(p) => map_view_at(p),
            None => {
                log::debug!("dispatch: no located result to open on the map");
                Action::None
            }
        },
        Key::SoftLeft | Key::Control if on(routes::ARTICLE) => match cx.current_article {
            Some(p) => map_view_at(p),
            None => {
                log::debug!("dispatch: current article has no coordinates");
                Action::None
            }
        },
        Key::Enter if cx.active_is_input_group => Action::EnterInputGroup,
        Key::Backspace
            if [
                routes::MAP_VIEW,
                routes::ARTICLE,
                routes::DETAIL,
                routes::OPTIONS,
            ]
            .iter()
            .any(|&p| on(p)) =>
        {
            Action::Back
        }
        _ => Action::None,
    }
}

pub fn dispatch_long(key: &Key) -> Action {
    match key {
        Key::Backspace => Action::CloseWindow,
        _ => Action::None,
    }
}

/// Actions taken on key-down, before any press classification.
pub fn dispatch_key_down(key: &Key) -> Action {
    match key {
        Key::EndCall => Action::CloseWindow,
        _ => Action::None,
    }
}

/// Interpret a finished swipe. `at_top` is whether the page is scrolled to
/// the top.
pub fn dispatch_swipe(
    swipe: &SwipeGesture,
    route: &Route,
    at_top: bool,
    refresh_distance: f32,
) -> Action {
    match swipe.dir {
        SwipeDirection::Down if at_top && swipe.dy() > refresh_distance => {
            Action::Extension(Extension::Refresh)
        }
        SwipeDirection::Left if route.starts_with(routes::START) => {
            Action::Extension(Extension::SwitchCategory(HorizontalDir::Left))
        }
        SwipeDirection::Right if route.starts_with(routes::START) => {
            Action::Extension(Extension::SwitchCategory(HorizontalDir::Right))
        }
        _ => Action::None,
    }
}
