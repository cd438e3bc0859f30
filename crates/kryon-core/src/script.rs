//! Seam to the embedded scripting VM.

use std::fmt;

use crate::{ElementEvent, ElementId, ElementTree};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The VM has no function with this name.
    UnknownFunction(String),
    /// The function ran and failed; details are available from
    /// [`ScriptVm::get_error`].
    Failed,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownFunction(name) => write!(f, "unknown script function '{name}'"),
            ScriptError::Failed => f.write_str("script function failed"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// A scripting VM that can run named handlers against the element tree.
///
/// Calls are synchronous. Handlers may mutate the tree, including removing
/// the element they were invoked for.
pub trait ScriptVm {
    fn call_function(
        &mut self,
        handler: &str,
        tree: &mut ElementTree,
        element: ElementId,
        event: &ElementEvent,
    ) -> Result<(), ScriptError>;

    /// Diagnostic for the most recent failure, if the VM kept one.
    fn get_error(&self) -> Option<String>;
}
