use bitflags::bitflags;

/// What kind of element a node is, as far as key handling is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Container,
    Button,
    Link,
    /// `<input>` with its `type` attribute.
    Input(InputType),
    /// `<select>`; owns its own arrow-key handling.
    Select,
    TextArea,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Text,
    Search,
    Number,
    Date,
    Time,
    Checkbox,
}

impl Role {
    /// Native controls that consume arrow keys themselves. Directional
    /// navigation is disabled while one of these has focus.
    pub fn owns_arrow_keys(&self) -> bool {
        matches!(
            self,
            Role::Select | Role::Input(InputType::Date) | Role::Input(InputType::Time)
        )
    }

    /// Any `<input>`, whatever its type. Backspace keeps its browser
    /// default on these.
    pub fn is_input(&self) -> bool {
        matches!(self, Role::Input(_))
    }
}

bitflags! {
    /// Marker classes the screens put on elements.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ElementFlags: u8 {
        /// Part of the screen's focusable set (`.item`).
        const ITEM = 1 << 0;
        /// Compound input group wrapping a native field (`.input-parent`).
        const INPUT_PARENT = 1 << 1;
        /// Scroll region that is nudged before traversal (`.scroll`).
        const SCROLL = 1 << 2;
    }
}

/// Snapshot of the attributes the navigator cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementInfo {
    pub role: Role,
    pub flags: ElementFlags,
    pub tab_index: i32,
}

impl ElementInfo {
    pub fn is_input_group(&self) -> bool {
        self.flags.contains(ElementFlags::INPUT_PARENT)
    }
}
