pub use crate::animation::{AnimatedValue, AnimationSpec, Easing};
pub use crate::clock::{Clock, SystemClock, TestClock};
pub use crate::error::HostError;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::host::{
    Dom, FocusEntry, FocusableSet, FocusableSetProvider, NodeId, NodeTree, ScrollBehavior,
    ScrollBox, ScrollTarget, ScrollableAncestorResolver,
};
pub use crate::input::*;
pub use crate::semantics::{ElementFlags, ElementInfo, InputType, Role};
pub use crate::signal::{Signal, signal};
pub use web_time::{Duration, Instant};
