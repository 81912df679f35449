//! Keypad runner: press classification, the route action table, and the
//! glue that drives focus, routing, the map and the window from raw events.
//!
//! A host owns a [`KeypadRunner`] and forwards key, touch and click events
//! with the time they happened, plus a [`Host`] that lends it the document,
//! router and collaborators for the duration of the call.
//!
//! ```rust
//! use kaipad_core::*;
//! use kaipad_navigation::{History, Route, Router};
//! use kaipad_platform::*;
//! use kaipad_ui::{ElementSpec, ElementTree};
//!
//! let clock = TestClock::default();
//! let mut dom = ElementTree::new(Size::new(240.0, 320.0), clock.now());
//! let root = dom.root();
//! for i in 0..3 {
//!     let frame = Rect::new(0.0, i as f32 * 40.0, 240.0, 40.0);
//!     dom.append(root, ElementSpec::item(format!("row{i}"), frame)).unwrap();
//! }
//! let mut history = History::new(Route::new("/start"));
//! let mut map = MapViewport::default();
//! let mut window = CloseLatch::default();
//! let mut hooks = NoHooks;
//! let state = AppState::default();
//!
//! let mut runner = KeypadRunner::new(KeypadConfig::default());
//! let mut host = Host {
//!     state: &state,
//!     dom: &mut dom,
//!     routes: &mut history,
//!     map: &mut map,
//!     window: &mut window,
//!     hooks: &mut hooks,
//! };
//! let down = KeyEvent::physical(Key::ArrowDown);
//! runner.key_down(&mut host, &down, clock.now());
//! runner.key_up(&mut host, &down, clock.advance_ms(80));
//! drop(host);
//!
//! assert_eq!(dom.active_label(), Some("row0"));
//! assert_eq!(history.current_route().path, "/start");
//! ```

pub mod collab;
pub mod config;
pub mod dispatch;
pub mod press;
pub mod runner;
pub mod state;

pub use collab::*;
pub use config::{ConfigError, KeypadConfig};
pub use dispatch::{
    Action, DispatchContext, Extension, Zoom, dispatch_key_down, dispatch_long, dispatch_short,
    dispatch_swipe,
};
pub use press::{DebounceGate, KeyDown, KeyUp, PressClassifier, PressState};
pub use runner::{Handled, Host, KeypadRunner, SoftButton};
pub use state::{AppState, ArticleRef, GeoPoint};
