//! Eased values for smooth scrolling.

use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out; what browsers use for `behavior: 'smooth'`.
    EaseOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - inv * inv,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::fast()
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// 150ms ease-out, the smooth-scroll default.
    pub fn fast() -> Self {
        Self::tween(Duration::from_millis(150), Easing::EaseOut)
    }

    /// Linear progress of an animation started at `since`, in `[0, 1]`.
    fn progress(&self, since: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(since);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

pub trait Interpolate: Clone {
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// A value easing from where it was towards a target.
///
/// Time is always passed in, so a test steps it with a [`TestClock`]
/// instead of sleeping.
///
/// [`TestClock`]: crate::TestClock
#[derive(Clone, Debug)]
pub struct AnimatedValue<T: Interpolate> {
    from: T,
    to: T,
    current: T,
    spec: AnimationSpec,
    started: Option<Instant>,
}

impl<T: Interpolate> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            from: initial.clone(),
            to: initial.clone(),
            current: initial,
            spec,
            started: None,
        }
    }

    /// Head for `target`, starting from the current (possibly mid-flight)
    /// value.
    pub fn set_target(&mut self, target: T, now: Instant) {
        self.from = self.current.clone();
        self.to = target;
        self.started = Some(now);
    }

    pub fn snap_to(&mut self, value: T) {
        self.from = value.clone();
        self.to = value.clone();
        self.current = value;
        self.started = None;
    }

    /// Advance to `now`. Returns true while still moving.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        let t = self.spec.progress(started, now);
        if t >= 1.0 {
            self.current = self.to.clone();
            self.started = None;
            return false;
        }
        self.current = self.from.lerp(&self.to, self.spec.easing.apply(t));
        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    pub fn is_animating(&self) -> bool {
        self.started.is_some()
    }
}
