//! # Core vocabulary
//!
//! `kaipad-core` holds the small set of types every other kaipad crate
//! speaks in:
//!
//! - [`Key`] / [`KeyEvent`]: key identifiers as a KaiOS browser reports them,
//!   plus touch and swipe events.
//! - [`Rect`], [`Vec2`], [`Size`]: viewport geometry.
//! - [`Clock`], [`TestClock`]: where "now" comes from. Handlers take
//!   `Instant`s explicitly so tests step time instead of sleeping.
//! - [`AnimatedValue`]: eased values used for smooth scrolling.
//! - [`Signal`]: observable values the host renders from.
//! - [`host`]: the DOM capability traits (`FocusableSetProvider`,
//!   `ScrollableAncestorResolver`) that the navigator and scroll
//!   synchroniser are written against.
//!
//! ```rust
//! use kaipad_core::*;
//!
//! let clock = TestClock::default();
//! let t0 = clock.now();
//! let t1 = clock.advance_ms(2000);
//! assert_eq!((t1 - t0).as_millis(), 2000);
//!
//! assert_eq!(Key::from_dom("SoftLeft"), Key::SoftLeft);
//! assert_eq!(Key::from_dom("*"), Key::Star);
//! ```

pub mod animation;
pub mod clock;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod prelude;
pub mod semantics;
pub mod signal;
pub mod tests;

pub use animation::*;
pub use clock::*;
pub use error::*;
pub use geometry::*;
pub use host::*;
pub use input::*;
pub use semantics::*;
pub use signal::*;

pub use web_time;
pub use web_time::{Duration, Instant};
