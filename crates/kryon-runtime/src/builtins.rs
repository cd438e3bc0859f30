//! Behaviors and element types every runtime starts with.
//!
//! State behaviors never consume events, so `script_events`, which comes
//! last in every definition, always sees them after the state was updated.

use kryon_behaviors::{
    Behavior, ElementDefinition, ElementRegistry, EventContext, RegistryError, RenderCommand,
};
use kryon_core::{ElementEvent, ElementEventKind, ElementId, EventData, Point, PropertyBag};
use kryon_input::{script_event_handler, script_events_behavior, PopupState, POPUP_OPTION_HEIGHT};

pub const HOVER_STATE: &str = "hover_state";
pub const CLICK_STATE: &str = "click_state";
pub const FOCUS_STATE: &str = "focus_state";
pub const SELECTION: &str = "selection";
pub const POPUP: &str = "popup";
pub const BACKGROUND: &str = "background";
pub const TEXT: &str = "text";
pub use kryon_input::SCRIPT_EVENTS_BEHAVIOR as SCRIPT_EVENTS;

pub const DEFAULT_FONT_SIZE: f32 = 16.0;
const DEFAULT_POPUP_COLOR: &str = "#ffffff";
const KEY_BACKSPACE: i32 = 8;

/// Text shown by the `text` behavior; the first non-empty property wins.
const TEXT_PROPERTIES: [&str; 3] = ["value", "text", "placeholder"];

pub fn builtin_behaviors() -> Vec<Behavior> {
    vec![
        script_events_behavior(),
        hover_state(),
        click_state(),
        focus_state(),
        selection(),
        popup(),
        background(),
        text(),
    ]
}

pub fn builtin_definitions() -> Vec<ElementDefinition> {
    let containers = ["Container", "Row", "Column", "Center", "Grid"].map(|type_name| {
        ElementDefinition::new(type_name, [BACKGROUND, HOVER_STATE, SCRIPT_EVENTS])
    });
    let mut definitions = vec![ElementDefinition::new("App", [BACKGROUND, SCRIPT_EVENTS])];
    definitions.extend(containers);
    definitions.extend([
        ElementDefinition::new("Text", [TEXT, SCRIPT_EVENTS]),
        ElementDefinition::new(
            "Button",
            [BACKGROUND, TEXT, HOVER_STATE, CLICK_STATE, FOCUS_STATE, SCRIPT_EVENTS],
        ),
        ElementDefinition::new(
            "Input",
            [BACKGROUND, TEXT, HOVER_STATE, FOCUS_STATE, SCRIPT_EVENTS],
        )
        .with_custom_event(edit_input),
        ElementDefinition::new(
            "Dropdown",
            [BACKGROUND, TEXT, HOVER_STATE, FOCUS_STATE, SELECTION, POPUP, SCRIPT_EVENTS],
        ),
    ]);
    definitions
}

/// Registers every built-in behavior, then every built-in definition.
pub fn register_builtins(registry: &mut ElementRegistry) -> Result<(), RegistryError> {
    for behavior in builtin_behaviors() {
        registry.register_behavior(behavior)?;
    }
    for definition in builtin_definitions() {
        registry.register_definition(definition)?;
    }
    Ok(())
}

fn hover_state() -> Behavior {
    Behavior::new(HOVER_STATE).on_event(|cx, id, event| {
        let hovered = match event.kind {
            ElementEventKind::Hovered => true,
            ElementEventKind::Unhovered => false,
            _ => return false,
        };
        if let Ok(state) = cx.tree.behavior_state_mut(id) {
            state.set_hovered(hovered);
        }
        false
    })
}

fn click_state() -> Behavior {
    Behavior::new(CLICK_STATE).on_event(|cx, id, event| {
        let clicked = match event.kind {
            ElementEventKind::Clicked | ElementEventKind::DoubleClicked => true,
            ElementEventKind::Unfocused => false,
            _ => return false,
        };
        if let Ok(state) = cx.tree.behavior_state_mut(id) {
            state.set_clicked(clicked);
        }
        false
    })
}

fn focus_state() -> Behavior {
    Behavior::new(FOCUS_STATE).on_event(|cx, id, event| {
        let focused = match event.kind {
            ElementEventKind::Focused => true,
            ElementEventKind::Unfocused => false,
            _ => return false,
        };
        if let Ok(state) = cx.tree.behavior_state_mut(id) {
            state.set_focused(focused);
        }
        false
    })
}

fn selection() -> Behavior {
    Behavior::new(SELECTION)
        .on_init(|tree, id| {
            let Ok(element) = tree.get_mut(id) else {
                return false;
            };
            let index = element.properties.int("selectedIndex", -1);
            element.behavior_state_mut().set_selected_index(index);
            true
        })
        .on_event(|cx, id, event| {
            let EventData::SelectionChanged { new_index, .. } = event.data else {
                return false;
            };
            if let Ok(state) = cx.tree.behavior_state_mut(id) {
                state.set_selected_index(new_index);
            }
            false
        })
}

/// Number of options of a popup owner: `optionCount`, or the entries of a
/// comma-separated `options` list.
fn option_count(properties: &PropertyBag) -> usize {
    let explicit = properties.int("optionCount", -1);
    if explicit >= 0 {
        return explicit as usize;
    }
    properties
        .string("options")
        .map(|options| options.split(',').filter(|o| !o.trim().is_empty()).count())
        .unwrap_or(0)
}

fn popup() -> Behavior {
    Behavior::new(POPUP)
        .on_init(|tree, id| {
            let Ok(element) = tree.get_mut(id) else {
                return false;
            };
            let popup = PopupState::new(option_count(&element.properties));
            element.behavior_state_mut().set_custom_data(popup);
            true
        })
        .on_render(|tree, id, commands| {
            let Ok(element) = tree.get(id) else {
                return;
            };
            let popup = element
                .behavior_state()
                .and_then(|state| state.custom_data::<PopupState>());
            if let Some(popup) = popup.filter(|popup| popup.is_open) {
                let color = element
                    .properties
                    .non_empty_string("popupColor")
                    .unwrap_or(DEFAULT_POPUP_COLOR);
                commands.push(RenderCommand::Rect {
                    element: id,
                    bounds: popup.region(element.bounds()),
                    color: color.to_owned(),
                });
            }
        })
        .on_event(toggle_popup)
}

/// A click inside the open popup picks an option and closes it; any other
/// click toggles it. A popup without options never picks. Picking consumes
/// the click.
fn toggle_popup(cx: &mut EventContext<'_>, id: ElementId, event: &mut ElementEvent) -> bool {
    if !matches!(
        event.kind,
        ElementEventKind::Clicked | ElementEventKind::DoubleClicked
    ) {
        return false;
    }
    let (picked, previous) = {
        let Ok(element) = cx.tree.get_mut(id) else {
            return false;
        };
        let bounds = element.bounds();
        let state = element.behavior_state_mut();
        let Some(mut popup) = state.custom_data::<PopupState>().copied() else {
            return false;
        };
        let picked = event
            .position()
            .filter(|_| popup.is_open && popup.option_count > 0)
            .filter(|(x, y)| popup.region(bounds).contains(*x, *y))
            .map(|(_, y)| {
                let row = ((y - bounds.bottom()) / POPUP_OPTION_HEIGHT) as usize;
                row.min(popup.option_count.saturating_sub(1)) as i32
            });
        popup.is_open = picked.is_none() && !popup.is_open;
        state.set_custom_data(popup);
        state.render_dirty = true;

        let previous = state.selected_index;
        match picked {
            Some(index) if state.set_selected_index(index) => (picked, Some(previous)),
            _ => (picked, None),
        }
    };
    cx.tree.request_update();
    if let (Some(index), Some(previous)) = (picked, previous) {
        let mut changed =
            ElementEvent::selection_changed(previous, index).with_timestamp(event.timestamp);
        script_event_handler(cx, id, &mut changed);
    }
    picked.is_some()
}

fn background() -> Behavior {
    Behavior::new(BACKGROUND).on_render(|tree, id, commands| {
        let Ok(element) = tree.get(id) else {
            return;
        };
        if let Some(color) = element.properties.non_empty_string("backgroundColor") {
            commands.push(RenderCommand::Rect {
                element: id,
                bounds: element.bounds(),
                color: color.to_owned(),
            });
        }
    })
}

fn text() -> Behavior {
    Behavior::new(TEXT).on_render(|tree, id, commands| {
        let Ok(element) = tree.get(id) else {
            return;
        };
        let properties = &element.properties;
        let Some(text) = TEXT_PROPERTIES
            .iter()
            .find_map(|name| properties.non_empty_string(name))
        else {
            return;
        };
        let padding = properties.float("padding", 0.0);
        commands.push(RenderCommand::Text {
            element: id,
            origin: Point::new(element.x + padding, element.y + padding),
            text: text.to_owned(),
            font_size: properties.float("fontSize", DEFAULT_FONT_SIZE),
        });
    })
}

enum Edit {
    Insert(char),
    Backspace,
}

/// Typing into an `Input` edits its `value` and reports the change through
/// `onChange`. The key event itself continues down the chain.
fn edit_input(cx: &mut EventContext<'_>, id: ElementId, event: &mut ElementEvent) -> bool {
    let edit = match event.data {
        EventData::KeyTyped { character, .. } if !character.is_control() => Edit::Insert(character),
        EventData::KeyPressed {
            key_code: KEY_BACKSPACE,
            ..
        } => Edit::Backspace,
        _ => return false,
    };
    let (previous, value) = {
        let Ok(element) = cx.tree.get_mut(id) else {
            return false;
        };
        let previous = element.properties.string("value").unwrap_or_default().to_owned();
        let mut value = previous.clone();
        match edit {
            Edit::Insert(character) => value.push(character),
            Edit::Backspace => {
                if value.pop().is_none() {
                    return false;
                }
            }
        }
        element.set_property("value", value.clone());
        element.needs_render = true;
        (previous, value)
    };
    let mut changed = ElementEvent::value_changed(previous, value).with_timestamp(event.timestamp);
    script_event_handler(cx, id, &mut changed);
    false
}
