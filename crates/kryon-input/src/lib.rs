//! Input handling for Kryon element trees.
//!
//! [`HitTestManager::process_input_event`] is the single entry point for
//! pointer and keyboard input. It re-runs layout, resolves the target with
//! [`find_element_at_point`] and dispatches abstract element events through
//! the element's composed behaviors. The [`script_events_behavior`] turns
//! those events into calls of named script handlers.

mod manager;
mod script;
mod types;

pub use hit_test::{
    find_element_at_point, find_element_at_point_with_slop, find_popup_at_point, PopupState,
    POPUP_MAX_HEIGHT, POPUP_OPTION_HEIGHT,
};
pub use manager::{HitTestManager, InputConfig, InputContext};
pub use script::{
    handler_property, resolve_handler, script_event_handler, script_events_behavior,
    SCRIPT_EVENTS_BEHAVIOR,
};
pub use types::{MouseButton, RawInputEvent};

#[cfg(test)]
#[path = "tests/hit_test_tests.rs"]
mod hit_test_tests;

#[cfg(test)]
#[path = "tests/manager_tests.rs"]
mod manager_tests;

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod script_tests;
