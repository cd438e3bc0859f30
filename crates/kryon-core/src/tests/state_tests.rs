use std::cell::RefCell;
use std::rc::Rc;

use crate::{ElementTree, PropertyBag};

#[test]
fn state_is_created_lazily_with_no_selection() {
    let mut tree = ElementTree::new();
    let id = tree.insert("Dropdown", PropertyBag::new());
    assert!(!tree.get(id).unwrap().has_behavior_state());

    let state = tree.behavior_state_mut(id).unwrap();
    assert_eq!(state.selected_index, -1);
    assert_eq!(state.owner(), id);
    assert!(!state.render_dirty);
    assert!(tree.get(id).unwrap().has_behavior_state());
}

#[test]
fn setters_only_fire_on_change() {
    let mut tree = ElementTree::new();
    let id = tree.insert("Button", PropertyBag::new());
    let fired = Rc::new(RefCell::new(Vec::new()));
    let state = tree.behavior_state_mut(id).unwrap();
    let sink = Rc::clone(&fired);
    state.set_on_state_changed(move |owner| sink.borrow_mut().push(owner));

    assert!(state.set_hovered(true));
    assert!(!state.set_hovered(true));
    assert!(state.set_selected_index(2));
    assert!(!state.set_selected_index(2));
    assert!(!state.set_clicked(false));

    assert!(state.render_dirty);
    assert_eq!(*fired.borrow(), vec![id, id]);
}

#[test]
fn unchanged_setter_leaves_render_dirty_alone() {
    let mut tree = ElementTree::new();
    let id = tree.insert("Button", PropertyBag::new());
    let state = tree.behavior_state_mut(id).unwrap();

    assert!(!state.set_focused(false));
    assert!(!state.render_dirty);
}

#[test]
fn cleared_callback_stops_firing() {
    let mut tree = ElementTree::new();
    let id = tree.insert("Button", PropertyBag::new());
    let fired = Rc::new(RefCell::new(0));
    let state = tree.behavior_state_mut(id).unwrap();
    let sink = Rc::clone(&fired);
    state.set_on_state_changed(move |_| *sink.borrow_mut() += 1);

    assert!(state.set_pressed(true));
    state.clear_on_state_changed();
    assert!(state.set_pressed(false));

    assert_eq!(*fired.borrow(), 1);
}

#[derive(Debug, PartialEq)]
struct Counter(u32);

struct DropProbe(Rc<RefCell<u32>>);

impl Drop for DropProbe {
    fn drop(&mut self) {
        *self.0.borrow_mut() += 1;
    }
}

#[test]
fn custom_data_downcasts_by_type() {
    let mut tree = ElementTree::new();
    let id = tree.insert("Slider", PropertyBag::new());
    let state = tree.behavior_state_mut(id).unwrap();

    assert!(!state.set_custom_data(Counter(1)));
    assert_eq!(state.custom_data::<Counter>(), Some(&Counter(1)));
    assert!(state.custom_data::<String>().is_none());

    if let Some(counter) = state.custom_data_mut::<Counter>() {
        counter.0 += 1;
    }
    assert!(state.take_custom_data::<String>().is_none());
    assert_eq!(state.take_custom_data::<Counter>(), Some(Counter(2)));
    assert!(!state.has_custom_data());
}

#[test]
fn custom_data_is_dropped_exactly_once_with_the_element() {
    let drops = Rc::new(RefCell::new(0));
    let mut tree = ElementTree::new();
    let id = tree.insert("Dropdown", PropertyBag::new());
    tree.behavior_state_mut(id)
        .unwrap()
        .set_custom_data(DropProbe(Rc::clone(&drops)));

    tree.remove(id).unwrap();

    assert_eq!(*drops.borrow(), 1);
}
