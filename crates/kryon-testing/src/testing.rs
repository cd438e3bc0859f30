use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kryon_core::{
    Clock, ElementEvent, ElementEventKind, ElementId, ElementTree, PropertyBag, ScriptError,
    ScriptVm,
};

/// Builds a [`PropertyBag`] from `name => value` pairs.
///
/// ```
/// use kryon_testing::props;
/// let bag = props! { "width" => 50.0, "text" => "hi", "visible" => true };
/// assert_eq!(bag.float("width", 0.0), 50.0);
/// ```
#[macro_export]
macro_rules! props {
    () => { ::kryon_core::PropertyBag::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut bag = ::kryon_core::PropertyBag::new();
        $( bag.set($name, $value); )+
        bag
    }};
}

/// Fluent construction of element trees.
#[derive(Default)]
pub struct TreeBuilder {
    tree: ElementTree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element, typically the root.
    pub fn root(&mut self, type_name: &str, properties: PropertyBag) -> ElementId {
        self.tree.insert(type_name, properties)
    }

    pub fn child(&mut self, parent: ElementId, type_name: &str, properties: PropertyBag) -> ElementId {
        let id = self.tree.insert(type_name, properties);
        if let Err(err) = self.tree.append_child(parent, id) {
            panic!("TreeBuilder::child: {err}");
        }
        id
    }

    /// Appends `count` plain leaves sharing the same properties.
    pub fn children(
        &mut self,
        parent: ElementId,
        type_name: &str,
        count: usize,
        properties: PropertyBag,
    ) -> Vec<ElementId> {
        (0..count)
            .map(|_| self.child(parent, type_name, properties.clone()))
            .collect()
    }

    pub fn tree(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    pub fn build(self) -> ElementTree {
        self.tree
    }
}

/// One handler invocation seen by [`RecordingScriptVm`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptCall {
    pub handler: String,
    pub element: ElementId,
    pub kind: ElementEventKind,
}

/// Script VM double that records calls and fails on demand.
///
/// Clones share the same call log, so a test can keep one handle while the
/// runtime owns another.
#[derive(Clone, Default)]
pub struct RecordingScriptVm {
    calls: Rc<RefCell<Vec<ScriptCall>>>,
    failing: Rc<RefCell<Vec<String>>>,
    last_error: Rc<RefCell<Option<String>>>,
}

impl RecordingScriptVm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call to `handler` fail with a diagnostic.
    pub fn fail_on(&self, handler: &str) {
        self.failing.borrow_mut().push(handler.to_owned());
    }

    pub fn calls(&self) -> Vec<ScriptCall> {
        self.calls.borrow().clone()
    }

    pub fn handlers(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.handler.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl ScriptVm for RecordingScriptVm {
    fn call_function(
        &mut self,
        handler: &str,
        _tree: &mut ElementTree,
        element: ElementId,
        event: &ElementEvent,
    ) -> Result<(), ScriptError> {
        self.calls.borrow_mut().push(ScriptCall {
            handler: handler.to_owned(),
            element,
            kind: event.kind,
        });
        if self.failing.borrow().iter().any(|name| name == handler) {
            *self.last_error.borrow_mut() = Some(format!("{handler}: boom"));
            return Err(ScriptError::Failed);
        }
        Ok(())
    }

    fn get_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }
}

/// Clock that only moves when told to.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }

    pub fn set(&self, millis: u64) {
        self.now.set(millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}
