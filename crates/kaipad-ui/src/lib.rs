//! # Focus, scroll and gesture handling
//!
//! The pieces of the navigation layer that touch the document:
//!
//! - [`focus::navigate`] moves focus up or down the screen's focusable set,
//!   wrapping at the ends, and hands off to the scroll synchroniser.
//! - [`center::center_element`] centres an element in its nearest scrollable
//!   ancestor (or the document).
//! - [`scroll::ScrollState`] is the per-container scroll model with smooth
//!   scrolling.
//! - [`gestures`] fades the page during horizontal drags and recognises
//!   discrete swipes.
//! - [`tree::ElementTree`] is an in-memory document implementing the DOM
//!   capability traits.
//!
//! ```rust
//! use kaipad_core::*;
//! use kaipad_ui::*;
//!
//! let mut tree = ElementTree::new(Size::new(240.0, 320.0), TestClock::default().now());
//! let root = tree.root();
//! let a = tree.append(root, ElementSpec::item("a", Rect::new(0.0, 0.0, 240.0, 40.0))).unwrap();
//! let b = tree.append(root, ElementSpec::item("b", Rect::new(0.0, 40.0, 240.0, 40.0))).unwrap();
//!
//! tree.focus(a).unwrap();
//! navigate(&mut tree, Direction::Down, NavigateOptions::default());
//! assert_eq!(tree.active_element(), Some(b));
//! ```

pub mod center;
pub mod focus;
pub mod gestures;
pub mod scroll;
pub mod tree;

pub use center::{CenterOutcome, center_active, center_element};
pub use focus::{Direction, FocusOutcome, NavigateOptions, enter_input_group, navigate};
pub use gestures::{SwipeDetector, SwipeFade, swipe_opacity};
pub use scroll::ScrollState;
pub use tree::{ElementSpec, ElementTree};
