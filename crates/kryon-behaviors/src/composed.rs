//! Composition of behaviors into one per-type dispatch table.

use std::rc::Rc;

use kryon_core::{ElementEvent, ElementId, ElementTree};

use crate::{
    Behavior, BehaviorId, BehaviorRegistry, ElementDefinition, EventContext, RegistryError,
    RenderCommandBuffer,
};

/// Concrete dispatch table for one element type.
///
/// Built once at registration from an ordered behavior list and the owning
/// definition's overrides. Order is significant for every chain.
#[derive(Debug)]
pub struct ComposedVTable {
    definition: ElementDefinition,
    behaviors: Vec<(BehaviorId, Rc<Behavior>)>,
}

impl ComposedVTable {
    /// Resolves every behavior name of `definition`. Any unknown name or an
    /// empty list fails the whole composition.
    pub fn compose(
        registry: &BehaviorRegistry,
        definition: ElementDefinition,
    ) -> Result<Self, RegistryError> {
        if definition.behavior_names().is_empty() {
            return Err(RegistryError::EmptyDefinition {
                type_name: definition.type_name().to_owned(),
            });
        }
        let mut behaviors = Vec::with_capacity(definition.behavior_names().len());
        for name in definition.behavior_names() {
            let resolved = registry
                .lookup(name)
                .and_then(|id| registry.get(id).map(|behavior| (id, Rc::clone(behavior))));
            match resolved {
                Some(entry) => behaviors.push(entry),
                None => {
                    return Err(RegistryError::UnknownBehavior {
                        type_name: definition.type_name().to_owned(),
                        behavior: name.clone(),
                    })
                }
            }
        }
        Ok(Self {
            definition,
            behaviors,
        })
    }

    pub fn type_name(&self) -> &str {
        self.definition.type_name()
    }

    pub fn definition(&self) -> &ElementDefinition {
        &self.definition
    }

    pub fn behavior_ids(&self) -> impl Iterator<Item = BehaviorId> + '_ {
        self.behaviors.iter().map(|(id, _)| *id)
    }

    pub fn behavior_names(&self) -> impl Iterator<Item = &str> {
        self.behaviors.iter().map(|(_, behavior)| behavior.name())
    }

    /// Runs `custom_init`, then each behavior's `init`, stopping at the first
    /// failure. Inits that already ran are not rolled back.
    pub fn init(&self, tree: &mut ElementTree, element: ElementId) -> bool {
        if let Some(init) = &self.definition.overrides().init {
            if !init(tree, element) {
                log::error!("custom init failed for element '{}'", self.type_name());
                return false;
            }
        }
        for (_, behavior) in &self.behaviors {
            if let Some(init) = &behavior.hooks().init {
                if !init(tree, element) {
                    log::error!(
                        "behavior '{}' init failed for element '{}'",
                        behavior.name(),
                        self.type_name()
                    );
                    return false;
                }
            }
        }
        true
    }

    /// Behaviors render in order until the buffer fills; `custom_render`
    /// always runs last.
    pub fn render(&self, tree: &ElementTree, element: ElementId, commands: &mut RenderCommandBuffer) {
        for (_, behavior) in &self.behaviors {
            if let Some(render) = &behavior.hooks().render {
                render(tree, element, commands);
                if commands.is_full() {
                    break;
                }
            }
        }
        if let Some(render) = &self.definition.overrides().render {
            render(tree, element, commands);
        }
    }

    /// `custom_handle_event` gets first refusal, then behaviors in order. The
    /// first hook that consumes the event ends the chain.
    pub fn handle_event(
        &self,
        cx: &mut EventContext<'_>,
        element: ElementId,
        event: &mut ElementEvent,
    ) -> bool {
        if let Some(handle) = &self.definition.overrides().handle_event {
            if handle(cx, element, event) {
                return true;
            }
        }
        for (_, behavior) in &self.behaviors {
            if let Some(handle) = &behavior.hooks().handle_event {
                if handle(cx, element, event) {
                    return true;
                }
            }
        }
        false
    }

    /// `custom_destroy`, then each behavior's `destroy`, then the element's
    /// behavior state is dropped.
    pub fn destroy(&self, tree: &mut ElementTree, element: ElementId) {
        if let Some(destroy) = &self.definition.overrides().destroy {
            destroy(tree, element);
        }
        for (_, behavior) in &self.behaviors {
            if let Some(destroy) = &behavior.hooks().destroy {
                destroy(tree, element);
            }
        }
        if let Ok(target) = tree.get_mut(element) {
            drop(target.take_behavior_state());
        }
    }
}
