//! Runtime context for Kryon element trees.
//!
//! A [`Runtime`] bundles the element tree with the registries, layout engine,
//! script VM and clock that act on it. Hosts feed platform input through
//! [`process_input_event`] and pull render commands with
//! [`Runtime::render_frame`].

mod builtins;
mod clock;
mod config;
mod runtime;

pub use builtins::{
    builtin_behaviors, builtin_definitions, register_builtins, BACKGROUND, CLICK_STATE,
    DEFAULT_FONT_SIZE, FOCUS_STATE, HOVER_STATE, POPUP, SCRIPT_EVENTS, SELECTION, TEXT,
};
pub use clock::StdClock;
pub use config::RuntimeConfig;
pub use runtime::Runtime;

pub use kryon_behaviors::{RegistryError, RenderCommand};
pub use kryon_input::{HitTestManager, MouseButton, RawInputEvent};

use kryon_core::ElementId;

/// Entry point for all pointer and keyboard input: lays out the tree under
/// `root`, then routes `event` through `manager`.
pub fn process_input_event(
    manager: &mut HitTestManager,
    runtime: &mut Runtime,
    root: ElementId,
    event: &RawInputEvent,
) {
    runtime.process_input_event(manager, root, event);
}

pub mod prelude {
    pub use crate::{process_input_event, HitTestManager, RawInputEvent, Runtime, RuntimeConfig};
    pub use kryon_core::prelude::*;
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
