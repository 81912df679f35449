use std::fmt;

use crate::Vec2;

/// Key identifiers as reported in `KeyboardEvent.key` on KaiOS and desktop
/// browsers. Soft keys on desktop are emulated with `Control`/`Alt`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Backspace,
    SoftLeft,
    SoftRight,
    Control,
    Alt,
    EndCall,
    Star,
    Hash,
    Character(char),
    Other(String),
}

impl Key {
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            "SoftLeft" => Key::SoftLeft,
            "SoftRight" => Key::SoftRight,
            "Control" => Key::Control,
            "Alt" => Key::Alt,
            "EndCall" => Key::EndCall,
            "*" => Key::Star,
            "#" => Key::Hash,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Other(other.to_string()),
                }
            }
        }
    }

    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowUp => f.write_str("ArrowUp"),
            Key::ArrowDown => f.write_str("ArrowDown"),
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::Enter => f.write_str("Enter"),
            Key::Backspace => f.write_str("Backspace"),
            Key::SoftLeft => f.write_str("SoftLeft"),
            Key::SoftRight => f.write_str("SoftRight"),
            Key::Control => f.write_str("Control"),
            Key::Alt => f.write_str("Alt"),
            Key::EndCall => f.write_str("EndCall"),
            Key::Star => f.write_str("*"),
            Key::Hash => f.write_str("#"),
            Key::Character(c) => write!(f, "{c}"),
            Key::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn physical(key: Key) -> Self {
        Self {
            key,
            is_repeat: false,
        }
    }

    /// Auto-repeat of a held key.
    pub fn repeat(key: Key) -> Self {
        Self {
            key,
            is_repeat: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// A single-finger touch sample in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A completed swipe with its start and end points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
    pub dir: SwipeDirection,
    pub start: Vec2,
    pub end: Vec2,
}

impl SwipeGesture {
    pub fn dy(&self) -> f32 {
        self.end.y - self.start.y
    }

    pub fn dx(&self) -> f32 {
        self.end.x - self.start.x
    }
}
