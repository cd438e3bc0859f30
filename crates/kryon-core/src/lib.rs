//! Element tree and shared data model for the Kryon runtime.
//!
//! The tree is an arena of [`Element`]s addressed by generation-checked
//! [`ElementId`] handles. Everything that dispatches into the tree (layout,
//! hit testing, behaviors, scripts) goes through [`ElementTree`].

pub mod collections;
mod element;
mod event;
mod geometry;
mod platform;
mod property;
mod script;
mod state;
mod tree;

pub use element::{Element, ElementId};
pub use event::{ElementEvent, ElementEventKind, EventData, KeyModifiers};
pub use geometry::{Point, Rect, Size};
pub use platform::Clock;
pub use property::{PropertyBag, PropertyValue};
pub use script::{ScriptError, ScriptVm};
pub use state::{BehaviorState, StateChangedCallback};
pub use tree::{ElementError, ElementTree};

pub mod prelude {
    pub use crate::element::{Element, ElementId};
    pub use crate::event::{ElementEvent, ElementEventKind, EventData};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::property::{PropertyBag, PropertyValue};
    pub use crate::state::BehaviorState;
    pub use crate::tree::{ElementError, ElementTree};
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tree_tests;

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod state_tests;
