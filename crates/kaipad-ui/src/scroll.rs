//! # Scroll model
//!
//! A `ScrollState` holds one container's vertical scroll: viewport height,
//! content height, the current offset, and an optional smooth-scroll
//! animation towards a target offset.
//!
//! - `scroll_to` moves to an absolute offset, either instantly or by easing
//!   there over `AnimationSpec::fast()`.
//! - `tick(now)` advances the animation; hosts call it once per frame.
//!
//! ```rust
//! use kaipad_core::*;
//! use kaipad_ui::scroll::ScrollState;
//!
//! let clock = TestClock::default();
//! let mut s = ScrollState::new(200.0, 1000.0);
//! s.scroll_to(300.0, ScrollBehavior::Smooth, clock.now());
//! assert_eq!(s.pending_target(), Some(300.0));
//!
//! s.tick(clock.advance_ms(500));
//! assert_eq!(s.get(), 300.0);
//! assert_eq!(s.pending_target(), None);
//! ```

use kaipad_core::*;

pub struct ScrollState {
    scroll_offset: Signal<f32>,
    viewport_height: f32,
    content_height: f32,
    anim: Option<AnimatedValue<f32>>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl ScrollState {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        Self {
            scroll_offset: signal(0.0),
            viewport_height: viewport_height.max(0.0),
            content_height: content_height.max(0.0),
            anim: None,
        }
    }

    pub fn set_content_height(&mut self, h: f32) {
        self.content_height = h.max(0.0);
        self.clamp_offset();
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Jump to `off` (clamped), cancelling any animation.
    pub fn set_offset(&mut self, off: f32) {
        self.anim = None;
        self.scroll_offset.set(off.clamp(0.0, self.max_offset()));
    }

    fn clamp_offset(&mut self) {
        let max_off = self.max_offset();
        if self.pending_target().is_some_and(|t| t > max_off) {
            self.anim = None;
        }
        self.scroll_offset.update(|o| *o = o.clamp(0.0, max_off));
    }

    pub fn get(&self) -> f32 {
        self.scroll_offset.get()
    }

    /// Target of the in-flight smooth scroll, if any.
    pub fn pending_target(&self) -> Option<f32> {
        self.anim.as_ref().map(|a| *a.target())
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    pub fn scroll_to(&mut self, top: f32, behavior: ScrollBehavior, now: Instant) {
        let top = top.clamp(0.0, self.max_offset());
        match behavior {
            ScrollBehavior::Instant => self.set_offset(top),
            ScrollBehavior::Smooth => {
                let mut anim = AnimatedValue::new(self.get(), AnimationSpec::fast());
                anim.set_target(top, now);
                self.anim = Some(anim);
            }
        }
    }

    /// Advance the smooth scroll to `now`; returns true while animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(anim) = &mut self.anim else {
            return false;
        };
        let running = anim.update(now);
        let value = *anim.get();
        if !running {
            self.anim = None;
        }
        self.scroll_offset.set(value);
        running
    }
}
