use kaipad_core::*;
use kaipad_navigation::RouteHost;
use kaipad_ui::{
    FocusOutcome, NavigateOptions, SwipeDetector, SwipeFade, enter_input_group, navigate,
};

use crate::collab::{ExtensionHooks, MapControl, WindowControl};
use crate::config::KeypadConfig;
use crate::dispatch::{
    Action, DispatchContext, Extension, Zoom, dispatch_key_down, dispatch_long, dispatch_short,
    dispatch_swipe,
};
use crate::press::{KeyDown, KeyUp, PressClassifier};
use crate::state::AppState;

/// Everything a handler may touch, lent for the duration of one event.
pub struct Host<'a> {
    pub state: &'a AppState,
    pub dom: &'a mut dyn Dom,
    pub routes: &'a mut dyn RouteHost,
    pub map: &'a mut dyn MapControl,
    pub window: &'a mut dyn WindowControl,
    pub hooks: &'a mut dyn ExtensionHooks,
}

/// On-screen buttons of the soft-key and top bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoftButton {
    Left,
    Center,
    Right,
    TopLeft,
    TopRight,
}

impl SoftButton {
    /// The physical key this button stands in for.
    pub fn key(self) -> Key {
        match self {
            SoftButton::Left => Key::SoftLeft,
            SoftButton::Center => Key::Enter,
            SoftButton::Right => Key::SoftRight,
            SoftButton::TopLeft => Key::Star,
            SoftButton::TopRight => Key::Backspace,
        }
    }
}

/// Result of feeding one event to the runner.
#[derive(Clone, Debug, PartialEq)]
pub struct Handled {
    /// What was performed (`Action::None` if nothing).
    pub action: Action,
    /// The host should suppress the platform's default for this event.
    pub prevent_default: bool,
}

impl Handled {
    fn nothing() -> Self {
        Self {
            action: Action::None,
            prevent_default: false,
        }
    }

    fn with_action(action: Action) -> Self {
        Self {
            action,
            prevent_default: false,
        }
    }
}

/// Turns raw key, touch and click events into navigation.
///
/// The host forwards every event with the time it happened and calls
/// [`tick`](Self::tick) at least by [`next_deadline`](Self::next_deadline)
/// so long presses fire on time.
pub struct KeypadRunner {
    config: KeypadConfig,
    press: PressClassifier,
    fade: SwipeFade,
    swipes: SwipeDetector,
    visible: bool,
}

impl KeypadRunner {
    pub fn new(config: KeypadConfig) -> Self {
        Self {
            press: PressClassifier::new(config.long_press(), config.debounce()),
            fade: SwipeFade::new(config.max_swipe_distance),
            swipes: SwipeDetector::new(config.swipe_threshold, config.swipe_timeout()),
            visible: true,
            config,
        }
    }

    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }

    /// Page opacity driven by horizontal drags.
    pub fn opacity(&self) -> Signal<f32> {
        self.fade.opacity()
    }

    pub fn press(&self) -> &PressClassifier {
        &self.press
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.press.next_deadline()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Document visibility changed. While hidden, key releases do nothing.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            log::debug!("keypad: visible={visible}");
        }
        self.visible = visible;
    }

    pub fn key_down(&mut self, host: &mut Host<'_>, ev: &KeyEvent, now: Instant) -> Handled {
        host.dom.set_now(now);
        let immediate = dispatch_key_down(&ev.key);
        if immediate != Action::None {
            self.press.cancel();
            self.perform(host, &immediate);
            return Handled {
                action: immediate,
                prevent_default: true,
            };
        }

        let down = self.press.key_down(&ev.key, ev.is_repeat, now);
        // Backspace would navigate the browser back; only focused inputs keep
        // it, and never its auto-repeat.
        let prevent_default = ev.key == Key::Backspace
            && (down == KeyDown::Repeat || !active_is_input(&*host.dom));
        Handled {
            action: Action::None,
            prevent_default,
        }
    }

    pub fn key_up(&mut self, host: &mut Host<'_>, ev: &KeyEvent, now: Instant) -> Handled {
        host.dom.set_now(now);
        let prevent_default = ev.key == Key::Backspace;
        if !self.visible {
            // The release still closes the debounce window.
            let _ = self.press.key_up(&ev.key, now);
            self.press.cancel();
            log::debug!("keypad: {} released while hidden", ev.key);
            return Handled {
                action: Action::None,
                prevent_default,
            };
        }

        let action = match self.press.key_up(&ev.key, now) {
            KeyUp::Short(key) => self.resolve_short(host, &key),
            KeyUp::AfterLong | KeyUp::Debounced => Action::None,
        };
        self.perform(host, &action);
        Handled {
            action,
            prevent_default,
        }
    }

    /// A tap on an on-screen button. Shares the release debounce with
    /// physical keys, so a key and its on-screen echo count once.
    pub fn click(&mut self, host: &mut Host<'_>, button: SoftButton, now: Instant) -> Handled {
        host.dom.set_now(now);
        let Some(key) = self.press.click(&button.key(), now) else {
            return Handled::nothing();
        };
        let action = self.resolve_short(host, &key);
        self.perform(host, &action);
        Handled::with_action(action)
    }

    pub fn touch(&mut self, host: &mut Host<'_>, ev: &TouchEvent, now: Instant) -> Handled {
        host.dom.set_now(now);
        self.fade.handle(ev);
        let Some(swipe) = self.swipes.handle(ev, now) else {
            return Handled::nothing();
        };
        self.swipe(host, &swipe)
    }

    /// A swipe recognised elsewhere (e.g. by the browser).
    pub fn swipe(&mut self, host: &mut Host<'_>, swipe: &SwipeGesture) -> Handled {
        let at_top = host
            .dom
            .scroll_box(ScrollTarget::Document)
            .is_none_or(|b| b.offset.y <= 0.0);
        let route = host.routes.current_route();
        let action = dispatch_swipe(swipe, &route, at_top, self.config.refresh_swipe_distance);
        self.perform(host, &action);
        Handled::with_action(action)
    }

    /// Fire a due long press.
    pub fn tick(&mut self, host: &mut Host<'_>, now: Instant) -> Handled {
        host.dom.set_now(now);
        let Some(key) = self.press.poll(now) else {
            return Handled::nothing();
        };
        let action = dispatch_long(&key);
        self.perform(host, &action);
        Handled::with_action(action)
    }

    fn resolve_short(&self, host: &Host<'_>, key: &Key) -> Action {
        let route = host.routes.current_route();
        let active_is_input_group = host
            .dom
            .active_element()
            .and_then(|id| host.dom.element(id))
            .is_some_and(|i| i.is_input_group());
        let cx = DispatchContext {
            route: &route,
            active_is_input_group,
            first_result: host.state.first_result_position(),
            current_article: host.state.current_article_position(),
        };
        dispatch_short(key, &cx)
    }

    fn perform(&self, host: &mut Host<'_>, action: &Action) {
        match action {
            Action::None => {}
            Action::MoveFocus(dir) => {
                let opts = NavigateOptions {
                    volume_mode: host.state.volume_mode,
                    scroll_nudge: self.config.scroll_nudge,
                    behavior: ScrollBehavior::Smooth,
                };
                let out = navigate(&mut *host.dom, *dir, opts);
                if !matches!(out, FocusOutcome::Moved { .. } | FocusOutcome::Delegated { .. }) {
                    log::debug!("keypad: focus {dir:?} -> {out:?}");
                }
            }
            Action::Navigate(route) => host.routes.set_route(route.clone()),
            Action::ZoomMap(Zoom::In) => host.map.zoom_in(),
            Action::ZoomMap(Zoom::Out) => host.map.zoom_out(),
            Action::EnterInputGroup => {
                enter_input_group(&mut *host.dom, ScrollBehavior::Smooth);
            }
            Action::Back => {
                if !host.routes.go_back() {
                    log::debug!("keypad: nothing to go back to");
                }
            }
            Action::CloseWindow => {
                log::info!("keypad: closing window");
                host.window.close();
            }
            Action::Extension(Extension::Refresh) => host.hooks.refresh(),
            Action::Extension(Extension::SwitchCategory(dir)) => host.hooks.switch_category(*dir),
        }
    }
}

fn active_is_input(dom: &dyn Dom) -> bool {
    dom.active_element()
        .and_then(|id| dom.element(id))
        .is_some_and(|i| i.role.is_input())
}
