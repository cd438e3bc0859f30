//! Behaviors: named, stateless bundles of element hooks.

use std::fmt;
use std::rc::Rc;

use kryon_core::{ElementEvent, ElementId, ElementTree, ScriptVm};

use crate::RenderCommandBuffer;

/// Mutable view handed to event hooks.
pub struct EventContext<'a> {
    pub tree: &'a mut ElementTree,
    pub script_vm: Option<&'a mut dyn ScriptVm>,
}

impl<'a> EventContext<'a> {
    pub fn new(tree: &'a mut ElementTree) -> Self {
        Self {
            tree,
            script_vm: None,
        }
    }

    pub fn with_script_vm(mut self, vm: &'a mut dyn ScriptVm) -> Self {
        self.script_vm = Some(vm);
        self
    }
}

/// Returns `false` to abort initialization of the element.
pub type InitHook = Rc<dyn Fn(&mut ElementTree, ElementId) -> bool>;
pub type RenderHook = Rc<dyn Fn(&ElementTree, ElementId, &mut RenderCommandBuffer)>;
/// Returns `true` when the event was consumed.
pub type EventHook = Rc<dyn Fn(&mut EventContext<'_>, ElementId, &mut ElementEvent) -> bool>;
pub type DestroyHook = Rc<dyn Fn(&mut ElementTree, ElementId)>;

/// Optional lifecycle hooks shared by behaviors and definition overrides.
#[derive(Clone, Default)]
pub struct Hooks {
    pub init: Option<InitHook>,
    pub render: Option<RenderHook>,
    pub handle_event: Option<EventHook>,
    pub destroy: Option<DestroyHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("init", &self.init.is_some())
            .field("render", &self.render.is_some())
            .field("handle_event", &self.handle_event.is_some())
            .field("destroy", &self.destroy.is_some())
            .finish()
    }
}

/// Interned handle of a registered behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BehaviorId(pub(crate) u16);

impl BehaviorId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
pub struct Behavior {
    name: String,
    hooks: Hooks,
}

impl Behavior {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: Hooks::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn on_init(mut self, hook: impl Fn(&mut ElementTree, ElementId) -> bool + 'static) -> Self {
        self.hooks.init = Some(Rc::new(hook));
        self
    }

    pub fn on_render(
        mut self,
        hook: impl Fn(&ElementTree, ElementId, &mut RenderCommandBuffer) + 'static,
    ) -> Self {
        self.hooks.render = Some(Rc::new(hook));
        self
    }

    pub fn on_event(
        mut self,
        hook: impl Fn(&mut EventContext<'_>, ElementId, &mut ElementEvent) -> bool + 'static,
    ) -> Self {
        self.hooks.handle_event = Some(Rc::new(hook));
        self
    }

    pub fn on_destroy(mut self, hook: impl Fn(&mut ElementTree, ElementId) + 'static) -> Self {
        self.hooks.destroy = Some(Rc::new(hook));
        self
    }
}

/// Declares an element type as an ordered list of behaviors plus optional
/// type-specific overrides.
#[derive(Clone, Debug)]
pub struct ElementDefinition {
    type_name: String,
    behavior_names: Vec<String>,
    overrides: Hooks,
}

impl ElementDefinition {
    pub fn new<I, S>(type_name: impl Into<String>, behavior_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            behavior_names: behavior_names.into_iter().map(Into::into).collect(),
            overrides: Hooks::default(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn behavior_names(&self) -> &[String] {
        &self.behavior_names
    }

    pub fn overrides(&self) -> &Hooks {
        &self.overrides
    }

    pub fn with_custom_init(
        mut self,
        hook: impl Fn(&mut ElementTree, ElementId) -> bool + 'static,
    ) -> Self {
        self.overrides.init = Some(Rc::new(hook));
        self
    }

    pub fn with_custom_render(
        mut self,
        hook: impl Fn(&ElementTree, ElementId, &mut RenderCommandBuffer) + 'static,
    ) -> Self {
        self.overrides.render = Some(Rc::new(hook));
        self
    }

    pub fn with_custom_event(
        mut self,
        hook: impl Fn(&mut EventContext<'_>, ElementId, &mut ElementEvent) -> bool + 'static,
    ) -> Self {
        self.overrides.handle_event = Some(Rc::new(hook));
        self
    }

    pub fn with_custom_destroy(mut self, hook: impl Fn(&mut ElementTree, ElementId) + 'static) -> Self {
        self.overrides.destroy = Some(Rc::new(hook));
        self
    }
}
