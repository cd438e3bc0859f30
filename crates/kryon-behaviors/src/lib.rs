//! Behavior composition for Kryon elements.
//!
//! Behaviors are registered once by name. An [`ElementDefinition`] lists the
//! behaviors an element type is made of; registering it composes a
//! [`ComposedVTable`] and publishes it in the [`ElementTypeRegistry`].
//! Dispatch through a type nobody registered, or a hook nobody provided, is a
//! silent no-op.

mod behavior;
mod composed;
mod error;
mod registry;
mod render;
mod types;

use std::rc::Rc;

use kryon_core::{ElementEvent, ElementId, ElementTree};

pub use behavior::{
    Behavior, BehaviorId, DestroyHook, ElementDefinition, EventContext, EventHook, Hooks,
    InitHook, RenderHook,
};
pub use composed::ComposedVTable;
pub use error::RegistryError;
pub use registry::{BehaviorRegistry, DEFAULT_MAX_BEHAVIORS};
pub use render::{RenderCommand, RenderCommandBuffer};
pub use types::{ElementTypeRegistry, DEFAULT_MAX_ELEMENT_TYPES};

/// Behavior and element type registries, populated at startup.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    behaviors: BehaviorRegistry,
    types: ElementTypeRegistry,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacities(max_behaviors: usize, max_types: usize) -> Self {
        Self {
            behaviors: BehaviorRegistry::with_capacity(max_behaviors),
            types: ElementTypeRegistry::with_capacity(max_types),
        }
    }

    pub fn behaviors(&self) -> &BehaviorRegistry {
        &self.behaviors
    }

    pub fn types(&self) -> &ElementTypeRegistry {
        &self.types
    }

    pub fn register_behavior(&mut self, behavior: Behavior) -> Result<BehaviorId, RegistryError> {
        let name = behavior.name().to_owned();
        match self.behaviors.register(behavior) {
            Ok(id) => {
                log::debug!("registered behavior '{name}'");
                Ok(id)
            }
            Err(err) => {
                log::error!("behavior registration failed: {err}");
                Err(err)
            }
        }
    }

    /// Validates, composes and publishes `definition`. Nothing is recorded
    /// unless every step succeeds.
    pub fn register_definition(
        &mut self,
        definition: ElementDefinition,
    ) -> Result<Rc<ComposedVTable>, RegistryError> {
        let result = ComposedVTable::compose(&self.behaviors, definition)
            .and_then(|vtable| self.types.register(vtable));
        match result {
            Ok(vtable) => {
                log::debug!(
                    "registered element '{}' ({})",
                    vtable.type_name(),
                    vtable.behavior_names().collect::<Vec<_>>().join(", ")
                );
                Ok(vtable)
            }
            Err(err) => {
                log::error!("element registration failed: {err}");
                Err(err)
            }
        }
    }

    pub fn vtable(&self, type_name: &str) -> Option<Rc<ComposedVTable>> {
        self.types.get(type_name)
    }

    fn vtable_for(&self, tree: &ElementTree, element: ElementId) -> Option<Rc<ComposedVTable>> {
        let type_name = &tree.get(element).ok()?.type_name;
        self.types.get(type_name)
    }

    /// Creates the element's behavior state and runs the init chain. Returns
    /// `false` for unregistered types and for any failing init.
    pub fn initialize_behaviors(&self, tree: &mut ElementTree, element: ElementId) -> bool {
        let Some(vtable) = self.vtable_for(tree, element) else {
            return false;
        };
        if tree.behavior_state_mut(element).is_err() {
            return false;
        }
        vtable.init(tree, element)
    }

    /// Initializes `root` and every descendant, pre-order. Returns how many
    /// elements initialized successfully.
    pub fn initialize_tree(&self, tree: &mut ElementTree, root: ElementId) -> usize {
        tree.descendants(root)
            .into_iter()
            .filter(|id| self.initialize_behaviors(tree, *id))
            .count()
    }

    pub fn dispatch_event(
        &self,
        cx: &mut EventContext<'_>,
        element: ElementId,
        event: &mut ElementEvent,
    ) -> bool {
        match self.vtable_for(cx.tree, element) {
            Some(vtable) => vtable.handle_event(cx, element, event),
            None => false,
        }
    }

    pub fn render_element(
        &self,
        tree: &ElementTree,
        element: ElementId,
        commands: &mut RenderCommandBuffer,
    ) -> bool {
        match self.vtable_for(tree, element) {
            Some(vtable) => {
                vtable.render(tree, element, commands);
                true
            }
            None => false,
        }
    }

    /// Runs the destroy chain for `element` and its descendants, children
    /// before parents, then removes the subtree from the tree.
    pub fn destroy_element(&self, tree: &mut ElementTree, element: ElementId) {
        let mut order = tree.descendants(element);
        order.reverse();
        for id in order {
            match self.vtable_for(tree, id) {
                Some(vtable) => vtable.destroy(tree, id),
                None => {
                    if let Ok(target) = tree.get_mut(id) {
                        drop(target.take_behavior_state());
                    }
                }
            }
        }
        if let Err(err) = tree.remove(element) {
            log::debug!("destroyed element already gone: {err}");
        }
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod registry_tests;

#[cfg(test)]
#[path = "tests/composed_tests.rs"]
mod composed_tests;
