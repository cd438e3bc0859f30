//! Per-element interaction state.
//!
//! A [`BehaviorState`] is created lazily the first time anything asks for it
//! and lives inside its [`Element`](crate::Element). Dropping the element's
//! state drops the custom data with it, so there is no separate destructor to
//! remember.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::ElementId;

/// Callback fired after any change-only setter actually changed a value.
pub type StateChangedCallback = Rc<dyn Fn(ElementId)>;

pub struct BehaviorState {
    owner: ElementId,
    pub hovered: bool,
    pub clicked: bool,
    pub pressed: bool,
    pub focused: bool,
    pub selected: bool,
    /// `-1` means nothing is selected.
    pub selected_index: i32,
    pub layout_dirty: bool,
    pub position_changed: bool,
    pub render_dirty: bool,
    custom_data: Option<Box<dyn Any>>,
    on_state_changed: Option<StateChangedCallback>,
}

impl BehaviorState {
    pub fn new(owner: ElementId) -> Self {
        Self {
            owner,
            hovered: false,
            clicked: false,
            pressed: false,
            focused: false,
            selected: false,
            selected_index: -1,
            layout_dirty: false,
            position_changed: false,
            render_dirty: false,
            custom_data: None,
            on_state_changed: None,
        }
    }

    pub fn owner(&self) -> ElementId {
        self.owner
    }

    pub fn set_on_state_changed(&mut self, callback: impl Fn(ElementId) + 'static) {
        self.on_state_changed = Some(Rc::new(callback));
    }

    pub fn clear_on_state_changed(&mut self) {
        self.on_state_changed = None;
    }

    pub fn set_selected_index(&mut self, index: i32) -> bool {
        if self.selected_index == index {
            return false;
        }
        self.selected_index = index;
        self.changed();
        true
    }

    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        self.changed();
        true
    }

    pub fn set_clicked(&mut self, clicked: bool) -> bool {
        if self.clicked == clicked {
            return false;
        }
        self.clicked = clicked;
        self.changed();
        true
    }

    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        if self.pressed == pressed {
            return false;
        }
        self.pressed = pressed;
        self.changed();
        true
    }

    pub fn set_focused(&mut self, focused: bool) -> bool {
        if self.focused == focused {
            return false;
        }
        self.focused = focused;
        self.changed();
        true
    }

    pub fn set_selected(&mut self, selected: bool) -> bool {
        if self.selected == selected {
            return false;
        }
        self.selected = selected;
        self.changed();
        true
    }

    fn changed(&mut self) {
        self.render_dirty = true;
        if let Some(callback) = self.on_state_changed.clone() {
            callback(self.owner);
        }
    }

    /// Replaces the custom data, returning whether something was already stored.
    pub fn set_custom_data<T: Any>(&mut self, data: T) -> bool {
        self.custom_data.replace(Box::new(data)).is_some()
    }

    pub fn has_custom_data(&self) -> bool {
        self.custom_data.is_some()
    }

    /// Downcasts the custom data to `T`. Returns `None` for absent data or a
    /// different stored type.
    pub fn custom_data<T: Any>(&self) -> Option<&T> {
        self.custom_data.as_deref()?.downcast_ref::<T>()
    }

    pub fn custom_data_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.custom_data.as_deref_mut()?.downcast_mut::<T>()
    }

    /// Removes the custom data if it is a `T`; data of another type stays put.
    pub fn take_custom_data<T: Any>(&mut self) -> Option<T> {
        match self.custom_data.take()?.downcast::<T>() {
            Ok(data) => Some(*data),
            Err(other) => {
                self.custom_data = Some(other);
                None
            }
        }
    }
}

impl fmt::Debug for BehaviorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorState")
            .field("owner", &self.owner)
            .field("hovered", &self.hovered)
            .field("clicked", &self.clicked)
            .field("pressed", &self.pressed)
            .field("focused", &self.focused)
            .field("selected", &self.selected)
            .field("selected_index", &self.selected_index)
            .field("render_dirty", &self.render_dirty)
            .field("has_custom_data", &self.custom_data.is_some())
            .finish_non_exhaustive()
    }
}
