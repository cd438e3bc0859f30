use crate::{ElementError, ElementTree, PropertyBag};

fn node(tree: &mut ElementTree, type_name: &str) -> crate::ElementId {
    tree.insert(type_name, PropertyBag::new())
}

#[test]
fn append_child_keeps_declaration_order() {
    let mut tree = ElementTree::new();
    let root = node(&mut tree, "Column");
    let a = node(&mut tree, "Text");
    let b = node(&mut tree, "Text");
    tree.append_child(root, a).unwrap();
    tree.append_child(root, b).unwrap();

    assert_eq!(tree.children(root), &[a, b]);
    assert_eq!(tree.parent(a), Some(root));
    assert_eq!(tree.parent(root), None);
}

#[test]
fn reparenting_detaches_from_previous_parent() {
    let mut tree = ElementTree::new();
    let first = node(&mut tree, "Row");
    let second = node(&mut tree, "Row");
    let child = node(&mut tree, "Text");
    tree.append_child(first, child).unwrap();
    tree.append_child(second, child).unwrap();

    assert!(tree.children(first).is_empty());
    assert_eq!(tree.children(second), &[child]);
}

#[test]
fn append_rejects_cycles() {
    let mut tree = ElementTree::new();
    let root = node(&mut tree, "Column");
    let child = node(&mut tree, "Row");
    tree.append_child(root, child).unwrap();

    let err = tree.append_child(child, root).unwrap_err();
    assert_eq!(err, ElementError::Cycle { parent: child, child: root });
    assert_eq!(
        tree.append_child(root, root),
        Err(ElementError::Cycle { parent: root, child: root })
    );
}

#[test]
fn remove_drops_subtree_and_invalidates_handles() {
    let mut tree = ElementTree::new();
    let root = node(&mut tree, "App");
    let column = node(&mut tree, "Column");
    let leaf = node(&mut tree, "Text");
    tree.append_child(root, column).unwrap();
    tree.append_child(column, leaf).unwrap();

    assert_eq!(tree.remove(column), Ok(2));
    assert_eq!(tree.len(), 1);
    assert!(tree.children(root).is_empty());
    assert_eq!(tree.get(leaf).unwrap_err(), ElementError::Stale { id: leaf });

    // Slots are reused, but the old handle stays dead.
    let reused = node(&mut tree, "Button");
    assert_eq!(reused.index(), leaf.index());
    assert!(!tree.contains(leaf));
    assert!(!tree.contains(column));
    assert!(tree.contains(reused));
}

#[test]
fn reused_slot_does_not_resurrect_stale_handle() {
    let mut tree = ElementTree::new();
    let old = node(&mut tree, "Text");
    tree.remove(old).unwrap();
    let new = node(&mut tree, "Text");

    assert_eq!(old.index(), new.index());
    assert_ne!(old.generation(), new.generation());
    assert!(tree.get(old).is_err());
    assert!(tree.get(new).is_ok());
}

#[test]
fn descendants_are_pre_order() {
    let mut tree = ElementTree::new();
    let root = node(&mut tree, "Column");
    let a = node(&mut tree, "Row");
    let a1 = node(&mut tree, "Text");
    let b = node(&mut tree, "Text");
    tree.append_child(root, a).unwrap();
    tree.append_child(a, a1).unwrap();
    tree.append_child(root, b).unwrap();

    assert_eq!(tree.descendants(root), vec![root, a, a1, b]);
}

#[test]
fn mark_all_needs_render_flags_every_element() {
    let mut tree = ElementTree::new();
    let root = node(&mut tree, "Column");
    let child = node(&mut tree, "Text");
    tree.append_child(root, child).unwrap();
    for element in tree.iter_mut() {
        element.needs_render = false;
    }

    tree.mark_all_needs_render();

    assert!(tree.iter().all(|element| element.needs_render));
    assert!(tree.take_update_request());
    assert!(!tree.take_update_request());
}

#[test]
fn dump_tree_lists_nested_types() {
    let mut tree = ElementTree::new();
    let root = node(&mut tree, "Column");
    let child = node(&mut tree, "Text");
    tree.append_child(root, child).unwrap();

    let dump = tree.dump_tree(Some(root));
    assert!(dump.contains("Column"));
    assert!(dump.contains("  ["));
    assert!(dump.contains("Text"));
    assert_eq!(tree.dump_tree(None), "(no root)\n");
}

#[test]
fn property_getters_do_not_coerce() {
    let props: PropertyBag = [("width", crate::PropertyValue::from("120"))]
        .into_iter()
        .collect();
    assert_eq!(props.float("width", 7.0), 7.0);
    assert_eq!(props.string("width"), Some("120"));
    assert_eq!(props.non_empty_string("missing"), None);
}
