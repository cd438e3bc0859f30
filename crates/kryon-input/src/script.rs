//! Generic bridge from element events to named script handlers.

use kryon_behaviors::{Behavior, EventContext};
use kryon_core::{ElementEvent, ElementEventKind, ElementId, ElementTree};

/// Name of the behavior created by [`script_events_behavior`].
pub const SCRIPT_EVENTS_BEHAVIOR: &str = "script_events";

/// Property holding the handler name for events of `kind`.
pub fn handler_property(kind: ElementEventKind) -> Option<&'static str> {
    let name = match kind {
        ElementEventKind::Clicked => "onClick",
        ElementEventKind::DoubleClicked => "onDoubleClick",
        ElementEventKind::Hovered => "onHover",
        ElementEventKind::Unhovered => "onUnhover",
        ElementEventKind::Focused => "onFocus",
        ElementEventKind::Unfocused => "onBlur",
        ElementEventKind::KeyPressed => "onKeyPress",
        ElementEventKind::KeyTyped => "onKeyType",
        ElementEventKind::SelectionChanged => "onSelectionChange",
        ElementEventKind::ValueChanged => "onChange",
        ElementEventKind::MouseMoved | ElementEventKind::Custom => return None,
    };
    Some(name)
}

/// Handler the element declares for `kind`. A double click on an element
/// without `onDoubleClick` resolves to its `onClick` handler.
pub fn resolve_handler(tree: &ElementTree, element: ElementId, kind: ElementEventKind) -> Option<String> {
    let properties = &tree.get(element).ok()?.properties;
    let lookup = |name: &str| properties.non_empty_string(name).map(str::to_owned);
    match handler_property(kind).and_then(lookup) {
        None if kind == ElementEventKind::DoubleClicked => lookup("onClick"),
        handler => handler,
    }
}

/// Invokes the element's script handler for `event`.
///
/// On success the event is marked handled and the whole tree is flagged for
/// re-render, since the handler may have touched anything. Failures are
/// logged and leave the event unhandled.
pub fn script_event_handler(
    cx: &mut EventContext<'_>,
    element: ElementId,
    event: &mut ElementEvent,
) -> bool {
    let Some(handler) = resolve_handler(cx.tree, element, event.kind) else {
        return false;
    };
    let Some(vm) = cx.script_vm.as_deref_mut() else {
        log::debug!("no script VM for handler '{handler}' on {element}");
        return false;
    };
    match vm.call_function(&handler, cx.tree, element, event) {
        Ok(()) => {
            event.handled = true;
            cx.tree.mark_all_needs_render();
            true
        }
        Err(err) => {
            let detail = vm.get_error().unwrap_or_else(|| err.to_string());
            log::error!("script handler '{handler}' failed on {element}: {detail}");
            event.handled = false;
            false
        }
    }
}

pub fn script_events_behavior() -> Behavior {
    Behavior::new(SCRIPT_EVENTS_BEHAVIOR).on_event(script_event_handler)
}
