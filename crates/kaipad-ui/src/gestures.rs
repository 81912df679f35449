use kaipad_core::*;

/// Opacity for a horizontal drag of `dx` pixels: 1.0 at rest, fading
/// linearly to 0.0 at `max_distance` and beyond.
pub fn swipe_opacity(dx: f32, max_distance: f32) -> f32 {
    if max_distance <= 0.0 {
        return 1.0;
    }
    1.0 - (dx.abs() / max_distance).min(1.0)
}

/// Fades the page while a finger drags sideways.
///
/// The opacity is published through a [`Signal`] so the host can apply it to
/// the page container without the navigation layer knowing about styles.
pub struct SwipeFade {
    max_distance: f32,
    start_x: Option<f32>,
    opacity: Signal<f32>,
}

impl SwipeFade {
    pub fn new(max_distance: f32) -> Self {
        Self {
            max_distance,
            start_x: None,
            opacity: signal(1.0),
        }
    }

    pub fn opacity(&self) -> Signal<f32> {
        self.opacity.clone()
    }

    pub fn handle(&mut self, event: &TouchEvent) {
        match event.phase {
            TouchPhase::Started => {
                self.start_x = Some(event.position.x);
                self.opacity.set_if_changed(1.0);
            }
            TouchPhase::Moved => {
                if let Some(start) = self.start_x {
                    let dx = event.position.x - start;
                    self.opacity
                        .set_if_changed(swipe_opacity(dx, self.max_distance));
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.start_x = None;
                self.opacity.set_if_changed(1.0);
            }
        }
    }
}

/// Turns a touch start/end pair into a discrete [`SwipeGesture`].
///
/// A swipe must travel more than `threshold` pixels along its dominant axis
/// and finish within `timeout`.
pub struct SwipeDetector {
    threshold: f32,
    timeout: Duration,
    press_start: Option<(Instant, Vec2)>,
}

impl SwipeDetector {
    pub fn new(threshold: f32, timeout: Duration) -> Self {
        Self {
            threshold,
            timeout,
            press_start: None,
        }
    }

    pub fn handle(&mut self, event: &TouchEvent, now: Instant) -> Option<SwipeGesture> {
        match event.phase {
            TouchPhase::Started => {
                self.press_start = Some((now, event.position));
                None
            }
            TouchPhase::Moved => None,
            TouchPhase::Cancelled => {
                self.press_start = None;
                None
            }
            TouchPhase::Ended => {
                let (start_time, start) = self.press_start.take()?;
                if now.saturating_duration_since(start_time) > self.timeout {
                    return None;
                }
                let d = start.delta_to(event.position);
                let dir = if d.x.abs() > d.y.abs() {
                    if d.x.abs() <= self.threshold {
                        return None;
                    }
                    if d.x > 0.0 {
                        SwipeDirection::Right
                    } else {
                        SwipeDirection::Left
                    }
                } else {
                    if d.y.abs() <= self.threshold {
                        return None;
                    }
                    if d.y > 0.0 {
                        SwipeDirection::Down
                    } else {
                        SwipeDirection::Up
                    }
                };
                Some(SwipeGesture {
                    dir,
                    start,
                    end: event.position,
                })
            }
        }
    }
}
