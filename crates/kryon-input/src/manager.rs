use kryon_behaviors::{ElementRegistry, EventContext};
use kryon_core::{ElementEvent, ElementEventKind, ElementId, ElementTree, EventData, ScriptVm};
use kryon_layout::LayoutEngine;

use crate::{find_element_at_point_with_slop, MouseButton, RawInputEvent};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputConfig {
    /// Two clicks closer than this are a double click.
    pub double_click_interval_ms: u64,
    /// Maximum per-axis pointer travel between the clicks of a double click.
    pub double_click_distance: f32,
    /// Tolerance added around element bounds during hit testing.
    pub hit_slop: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            double_click_interval_ms: 500,
            double_click_distance: 5.0,
            hit_slop: 0.0,
        }
    }
}

/// Everything one input event needs from the runtime.
pub struct InputContext<'a> {
    pub tree: &'a mut ElementTree,
    pub registry: &'a ElementRegistry,
    pub layout: &'a mut LayoutEngine,
    pub script_vm: Option<&'a mut dyn ScriptVm>,
    pub config: InputConfig,
    /// Current time on the runtime clock, in milliseconds.
    pub now: u64,
}

impl<'a> InputContext<'a> {
    pub fn new(
        tree: &'a mut ElementTree,
        registry: &'a ElementRegistry,
        layout: &'a mut LayoutEngine,
    ) -> Self {
        Self {
            tree,
            registry,
            layout,
            script_vm: None,
            config: InputConfig::default(),
            now: 0,
        }
    }

    pub fn with_script_vm(mut self, vm: &'a mut dyn ScriptVm) -> Self {
        self.script_vm = Some(vm);
        self
    }

    pub fn with_config(mut self, config: InputConfig) -> Self {
        self.config = config;
        self
    }

    pub fn at(mut self, now: u64) -> Self {
        self.now = now;
        self
    }

    /// Dispatches `event` to `target` through its composed vtable.
    pub fn dispatch(&mut self, target: ElementId, mut event: ElementEvent) -> bool {
        event.timestamp = self.now;
        let mut cx = EventContext::new(&mut *self.tree);
        if let Some(vm) = self.script_vm.as_deref_mut() {
            cx = cx.with_script_vm(vm);
        }
        let handled = self.registry.dispatch_event(&mut cx, target, &mut event);
        log::trace!("{:?} -> {target}: handled={handled}", event.kind);
        handled
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ClickRecord {
    time: u64,
    x: f32,
    y: f32,
}

/// Pointer and keyboard focus tracking.
///
/// The stored element handles never keep elements alive; handles whose
/// element was removed are dropped by [`HitTestManager::revalidate`] before
/// every event.
#[derive(Debug, Default)]
pub struct HitTestManager {
    hovered: Option<ElementId>,
    focused: Option<ElementId>,
    clicked: Option<ElementId>,
    last_click: Option<ClickRecord>,
}

impl HitTestManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn clicked(&self) -> Option<ElementId> {
        self.clicked
    }

    /// Forgets references to elements that no longer exist.
    pub fn revalidate(&mut self, tree: &ElementTree) {
        for slot in [&mut self.hovered, &mut self.focused, &mut self.clicked] {
            if slot.is_some_and(|id| !tree.contains(id)) {
                *slot = None;
            }
        }
    }

    /// Clears every reference and the click history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Lays out the tree, then translates `event` into element events.
    pub fn process_input_event(
        &mut self,
        cx: &mut InputContext<'_>,
        root: ElementId,
        event: &RawInputEvent,
    ) {
        cx.layout.force_layout(cx.tree, root);
        self.revalidate(cx.tree);

        match *event {
            RawInputEvent::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } => self.mouse_down(cx, root, x, y),
            RawInputEvent::MouseUp {
                button: MouseButton::Left,
                ..
            } => self.clicked = None,
            RawInputEvent::MouseDown { .. } | RawInputEvent::MouseUp { .. } => {}
            RawInputEvent::MouseMove { x, y } => self.mouse_move(cx, root, x, y),
            RawInputEvent::KeyDown {
                key_code,
                modifiers,
            } => self.dispatch_to_focus(
                cx,
                ElementEvent::new(ElementEventKind::KeyPressed).with_data(EventData::KeyPressed {
                    key_code,
                    modifiers,
                }),
            ),
            RawInputEvent::TextInput { character } => self.dispatch_to_focus(
                cx,
                ElementEvent::new(ElementEventKind::KeyTyped).with_data(EventData::KeyTyped {
                    character,
                    modifiers: Default::default(),
                }),
            ),
        }
    }

    fn mouse_down(&mut self, cx: &mut InputContext<'_>, root: ElementId, x: f32, y: f32) {
        let hit = find_element_at_point_with_slop(cx.tree, root, x, y, cx.config.hit_slop);

        if hit != self.focused {
            if let Some(previous) = self.focused {
                cx.dispatch(previous, ElementEvent::new(ElementEventKind::Unfocused));
            }
            if let Some(next) = hit {
                cx.dispatch(next, ElementEvent::new(ElementEventKind::Focused));
            }
            self.focused = hit;
        }

        let Some(target) = hit else {
            return;
        };
        let kind = if self.is_double_click(&cx.config, cx.now, x, y) {
            ElementEventKind::DoubleClicked
        } else {
            ElementEventKind::Clicked
        };
        self.last_click = Some(ClickRecord { time: cx.now, x, y });
        self.clicked = Some(target);
        cx.dispatch(target, ElementEvent::mouse(kind, x, y));
    }

    fn is_double_click(&self, config: &InputConfig, now: u64, x: f32, y: f32) -> bool {
        self.last_click.is_some_and(|last| {
            now.saturating_sub(last.time) < config.double_click_interval_ms
                && (x - last.x).abs() < config.double_click_distance
                && (y - last.y).abs() < config.double_click_distance
        })
    }

    fn mouse_move(&mut self, cx: &mut InputContext<'_>, root: ElementId, x: f32, y: f32) {
        let hit = find_element_at_point_with_slop(cx.tree, root, x, y, cx.config.hit_slop);
        if hit != self.hovered {
            if let Some(previous) = self.hovered {
                cx.dispatch(previous, ElementEvent::new(ElementEventKind::Unhovered));
            }
            if let Some(next) = hit {
                cx.dispatch(next, ElementEvent::new(ElementEventKind::Hovered));
            }
            self.hovered = hit;
        }
        if let Some(target) = hit {
            cx.dispatch(target, ElementEvent::mouse(ElementEventKind::MouseMoved, x, y));
        }
    }

    fn dispatch_to_focus(&mut self, cx: &mut InputContext<'_>, event: ElementEvent) {
        match self.focused {
            Some(target) => {
                cx.dispatch(target, event);
            }
            None => log::trace!("{:?} dropped: nothing focused", event.kind),
        }
    }
}
