//! Short/long press classification.
//!
//! # State machine
//!
//! ```text
//!            key-down                 key-up (before deadline)
//!   Idle ─────────────────▶ Armed ─────────────────────────────▶ Idle  => Short(key)
//!                             │
//!                             │ poll(now >= deadline)
//!                             ▼
//!                           Long  ──────── key-up ─────────────▶ Idle  => nothing
//!                                  => Long(key) once
//! ```
//!
//! # Invariants
//!
//! 1. At most one of Short / Long is produced per press-release cycle.
//! 2. Auto-repeat key-downs never re-arm or reset the timer.
//! 3. A pending deadline is dropped before a key-up is evaluated, so a late
//!    `poll` cannot fire Long after Short.
//! 4. Each debounce gate opens again only once its window has elapsed since
//!    the last event it let through.
//!
//! Time is passed in by the caller; nothing here reads a clock.

use kaipad_core::{Duration, Instant, Key};

/// Drops events that arrive within `window` of the last accepted one.
#[derive(Clone, Debug)]
pub struct DebounceGate {
    window: Duration,
    last: Option<Instant>,
}

impl DebounceGate {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub fn admit(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last
            && now.saturating_duration_since(last) < self.window
        {
            return false;
        }
        self.last = Some(now);
        true
    }
}

/// The single key currently held down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PressState {
    pub key: Key,
    pub is_long_press: bool,
    /// When the long-press timer fires; `None` once it has fired.
    pub deadline: Option<Instant>,
    /// Auto-repeat was seen for this press.
    pub repeat_suppressed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyDown {
    /// A long-press timer is running for this key.
    Armed,
    /// Auto-repeat of the held key; it does not dispatch anything.
    Repeat,
    Debounced,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyUp {
    Short(Key),
    /// The long press already fired for this key.
    AfterLong,
    Debounced,
}

#[derive(Clone, Debug)]
pub struct PressClassifier {
    long_press: Duration,
    down_gate: DebounceGate,
    up_gate: DebounceGate,
    state: Option<PressState>,
}

impl PressClassifier {
    pub fn new(long_press: Duration, debounce: Duration) -> Self {
        Self {
            long_press,
            down_gate: DebounceGate::new(debounce),
            up_gate: DebounceGate::new(debounce),
            state: None,
        }
    }

    pub fn state(&self) -> Option<&PressState> {
        self.state.as_ref()
    }

    /// When the host should call [`poll`](Self::poll) next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.as_ref().and_then(|s| s.deadline)
    }

    pub fn key_down(&mut self, key: &Key, is_repeat: bool, now: Instant) -> KeyDown {
        if !self.down_gate.admit(now) {
            log::trace!("press: key-down {key} debounced");
            return KeyDown::Debounced;
        }

        if let Some(s) = &mut self.state
            && s.key == *key
            && (is_repeat || !s.is_long_press)
        {
            s.repeat_suppressed = true;
            return KeyDown::Repeat;
        }
        if is_repeat {
            // Repeat for a key we never saw go down; there is nothing to arm.
            return KeyDown::Repeat;
        }

        if let Some(prev) = self.state.take() {
            log::trace!("press: {} replaced by {key}", prev.key);
        }
        self.state = Some(PressState {
            key: key.clone(),
            is_long_press: false,
            deadline: Some(now + self.long_press),
            repeat_suppressed: false,
        });
        log::trace!("press: {key} armed");
        KeyDown::Armed
    }

    /// Fire the long press if its deadline has passed. Returns the key once.
    pub fn poll(&mut self, now: Instant) -> Option<Key> {
        let s = self.state.as_mut()?;
        let deadline = s.deadline?;
        if now < deadline {
            return None;
        }
        s.deadline = None;
        s.is_long_press = true;
        log::trace!("press: {} long", s.key);
        Some(s.key.clone())
    }

    pub fn key_up(&mut self, key: &Key, now: Instant) -> KeyUp {
        if !self.up_gate.admit(now) {
            log::trace!("press: key-up {key} debounced");
            return KeyUp::Debounced;
        }
        match self.state.take() {
            Some(s) if s.is_long_press => KeyUp::AfterLong,
            // Either the armed key, or a key whose down we never saw (e.g.
            // it fell inside the debounce window): both resolve short.
            _ => KeyUp::Short(key.clone()),
        }
    }

    /// Synthetic presses from on-screen buttons: one key-up worth of input.
    pub fn click(&mut self, key: &Key, now: Instant) -> Option<Key> {
        if !self.up_gate.admit(now) {
            log::trace!("press: click {key} debounced");
            return None;
        }
        Some(key.clone())
    }

    /// Drop the current press without resolving it.
    pub fn cancel(&mut self) {
        if let Some(s) = self.state.take() {
            log::trace!("press: {} cancelled", s.key);
        }
    }
}
