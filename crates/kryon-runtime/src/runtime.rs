use std::fmt;
use std::rc::Rc;

use kryon_behaviors::{
    Behavior, BehaviorId, ComposedVTable, ElementDefinition, ElementRegistry, EventContext,
    RegistryError, RenderCommand, RenderCommandBuffer,
};
use kryon_core::{Clock, ElementEvent, ElementId, ElementTree, ScriptVm};
use kryon_input::{HitTestManager, InputContext, RawInputEvent};
use kryon_layout::LayoutEngine;

use crate::{register_builtins, RuntimeConfig, StdClock};

/// Owns everything one UI needs: the element tree, the registries it is
/// dispatched through, the layout engine and the host collaborators.
pub struct Runtime {
    tree: ElementTree,
    registry: ElementRegistry,
    layout: LayoutEngine,
    script_vm: Option<Box<dyn ScriptVm>>,
    clock: Box<dyn Clock>,
    config: RuntimeConfig,
}

impl Runtime {
    /// Creates a runtime with empty registries.
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            tree: ElementTree::new(),
            registry: ElementRegistry::with_capacities(config.max_behaviors, config.max_element_types),
            layout: LayoutEngine::new(config.layout_config()),
            script_vm: None,
            clock: Box::new(StdClock::new()),
            config,
        }
    }

    /// Creates a runtime with the built-in behaviors and element types.
    pub fn with_builtins(config: RuntimeConfig) -> Result<Self, RegistryError> {
        let mut runtime = Self::new(config);
        register_builtins(&mut runtime.registry)?;
        Ok(runtime)
    }

    pub fn with_tree(mut self, tree: ElementTree) -> Self {
        self.tree = tree;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_script_vm(mut self, vm: impl ScriptVm + 'static) -> Self {
        self.script_vm = Some(Box::new(vm));
        self
    }

    pub fn set_script_vm(&mut self, vm: Option<Box<dyn ScriptVm>>) {
        self.script_vm = vm;
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    pub fn now(&self) -> u64 {
        self.clock.now_millis()
    }

    pub fn register_behavior(&mut self, behavior: Behavior) -> Result<BehaviorId, RegistryError> {
        self.registry.register_behavior(behavior)
    }

    pub fn register_definition(
        &mut self,
        definition: ElementDefinition,
    ) -> Result<Rc<ComposedVTable>, RegistryError> {
        self.registry.register_definition(definition)
    }

    /// Runs the init chain of every element under `root`. Returns how many
    /// elements initialized successfully.
    pub fn initialize(&mut self, root: ElementId) -> usize {
        let initialized = self.registry.initialize_tree(&mut self.tree, root);
        log::debug!("initialized {initialized} elements under {root}");
        initialized
    }

    /// Debounced layout pass; see [`LayoutEngine::calculate_all_element_positions`].
    pub fn calculate_all_element_positions(&mut self, root: ElementId) -> bool {
        self.layout.calculate_all_element_positions(&mut self.tree, root)
    }

    pub fn force_layout(&mut self, root: ElementId) {
        self.layout.force_layout(&mut self.tree, root);
    }

    /// Lays out the tree if needed and renders every element under `root`,
    /// parents before children. Elements whose commands all fit are marked
    /// clean. Once the command buffer fills up, the element being rendered and
    /// everything after it stay dirty for the next frame.
    pub fn render_frame(&mut self, root: ElementId) -> Vec<RenderCommand> {
        self.layout.calculate_all_element_positions(&mut self.tree, root);
        let mut commands = RenderCommandBuffer::with_capacity(self.config.render_command_capacity);
        for id in self.tree.descendants(root) {
            self.registry.render_element(&self.tree, id, &mut commands);
            if commands.is_full() {
                // The element may have lost commands; it stays dirty.
                log::warn!(
                    "render command buffer full at {} commands; frame truncated at {id}",
                    commands.capacity()
                );
                break;
            }
            if let Ok(element) = self.tree.get_mut(id) {
                element.needs_render = false;
                if element.has_behavior_state() {
                    element.behavior_state_mut().render_dirty = false;
                }
            }
        }
        self.layout.advance_frame();
        commands.into_commands()
    }

    /// Returns whether anything asked for a new frame since the last call.
    pub fn take_update_request(&mut self) -> bool {
        self.tree.take_update_request()
    }

    /// Dispatches `event` to `element` through its composed behaviors.
    pub fn dispatch_event(&mut self, element: ElementId, event: &mut ElementEvent) -> bool {
        let mut cx = EventContext::new(&mut self.tree);
        if let Some(vm) = self.script_vm.as_deref_mut() {
            cx = cx.with_script_vm(vm);
        }
        self.registry.dispatch_event(&mut cx, element, event)
    }

    pub fn process_input_event(
        &mut self,
        manager: &mut HitTestManager,
        root: ElementId,
        event: &RawInputEvent,
    ) {
        let now = self.clock.now_millis();
        let mut cx = InputContext::new(&mut self.tree, &self.registry, &mut self.layout)
            .with_config(self.config.input_config())
            .at(now);
        if let Some(vm) = self.script_vm.as_deref_mut() {
            cx = cx.with_script_vm(vm);
        }
        manager.process_input_event(&mut cx, root, event);
    }

    /// Runs the destroy chain of `element` and its subtree and removes it
    /// from the tree.
    pub fn destroy_element(&mut self, element: ElementId) {
        self.registry.destroy_element(&mut self.tree, element);
    }

    pub fn dump_tree(&self, root: Option<ElementId>) -> String {
        self.tree.dump_tree(root)
    }
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("elements", &self.tree.len())
            .field("registry", &self.registry)
            .field("layout", &self.layout)
            .field("script_vm", &self.script_vm.is_some())
            .field("config", &self.config)
            .finish()
    }
}
