//! Abstract element events produced by the input dispatcher.

/// Kind of an [`ElementEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementEventKind {
    Clicked,
    DoubleClicked,
    Hovered,
    Unhovered,
    Focused,
    Unfocused,
    MouseMoved,
    KeyPressed,
    KeyTyped,
    SelectionChanged,
    ValueChanged,
    Custom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };
}

/// Payload carried by an [`ElementEvent`]; which variant is present depends
/// on the event kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EventData {
    #[default]
    None,
    Mouse {
        x: f32,
        y: f32,
    },
    KeyTyped {
        character: char,
        modifiers: KeyModifiers,
    },
    KeyPressed {
        key_code: i32,
        modifiers: KeyModifiers,
    },
    SelectionChanged {
        old_index: i32,
        new_index: i32,
    },
    ValueChanged {
        old_value: String,
        new_value: String,
    },
    Custom {
        tag: u32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElementEvent {
    pub kind: ElementEventKind,
    /// Milliseconds on the runtime clock; `0` when the source had no time.
    pub timestamp: u64,
    pub handled: bool,
    pub data: EventData,
}

impl ElementEvent {
    pub fn new(kind: ElementEventKind) -> Self {
        Self {
            kind,
            timestamp: 0,
            handled: false,
            data: EventData::None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_data(mut self, data: EventData) -> Self {
        self.data = data;
        self
    }

    pub fn mouse(kind: ElementEventKind, x: f32, y: f32) -> Self {
        Self::new(kind).with_data(EventData::Mouse { x, y })
    }

    pub fn selection_changed(old_index: i32, new_index: i32) -> Self {
        Self::new(ElementEventKind::SelectionChanged).with_data(EventData::SelectionChanged {
            old_index,
            new_index,
        })
    }

    pub fn value_changed(old_value: impl Into<String>, new_value: impl Into<String>) -> Self {
        Self::new(ElementEventKind::ValueChanged).with_data(EventData::ValueChanged {
            old_value: old_value.into(),
            new_value: new_value.into(),
        })
    }

    /// Pointer position, if this event carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Mouse { x, y } => Some((x, y)),
            _ => None,
        }
    }
}
