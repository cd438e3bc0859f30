use std::fmt;

use crate::{BehaviorState, PropertyBag, PropertyValue, Rect};

/// Generation-checked handle into an [`ElementTree`](crate::ElementTree).
///
/// A handle whose element was removed never resolves again, even after the
/// slot is reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl ElementId {
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// One node of the UI tree.
#[derive(Debug)]
pub struct Element {
    id: ElementId,
    pub type_name: String,
    pub properties: PropertyBag,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub last_x: f32,
    pub last_y: f32,
    pub position_changed: bool,
    pub needs_render: bool,
    pub needs_layout: bool,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    state: Option<BehaviorState>,
}

impl Element {
    pub(crate) fn new(id: ElementId, type_name: String, properties: PropertyBag) -> Self {
        Self {
            id,
            type_name,
            properties,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            last_x: 0.0,
            last_y: 0.0,
            position_changed: false,
            needs_render: true,
            needs_layout: true,
            parent: None,
            children: Vec::new(),
            state: None,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_type(&self, type_name: &str) -> bool {
        self.type_name == type_name
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.set(name, value);
        self.needs_layout = true;
    }

    pub fn behavior_state(&self) -> Option<&BehaviorState> {
        self.state.as_ref()
    }

    /// Returns the element's state, creating it on first access.
    pub fn behavior_state_mut(&mut self) -> &mut BehaviorState {
        let owner = self.id;
        self.state.get_or_insert_with(|| BehaviorState::new(owner))
    }

    pub fn has_behavior_state(&self) -> bool {
        self.state.is_some()
    }

    /// Detaches the state from the element. Dropping the result destroys it.
    pub fn take_behavior_state(&mut self) -> Option<BehaviorState> {
        self.state.take()
    }
}
