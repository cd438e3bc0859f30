use kryon_core::KeyModifiers;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

/// Platform input as delivered to [`HitTestManager`](crate::HitTestManager).
#[derive(Clone, Debug, PartialEq)]
pub enum RawInputEvent {
    MouseDown {
        x: f32,
        y: f32,
        button: MouseButton,
    },
    MouseUp {
        x: f32,
        y: f32,
        button: MouseButton,
    },
    MouseMove {
        x: f32,
        y: f32,
    },
    KeyDown {
        key_code: i32,
        modifiers: KeyModifiers,
    },
    TextInput {
        character: char,
    },
}

impl RawInputEvent {
    pub fn left_down(x: f32, y: f32) -> Self {
        RawInputEvent::MouseDown {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    pub fn left_up(x: f32, y: f32) -> Self {
        RawInputEvent::MouseUp {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    pub fn mouse_move(x: f32, y: f32) -> Self {
        RawInputEvent::MouseMove { x, y }
    }
}
