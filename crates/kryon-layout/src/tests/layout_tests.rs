use kryon_core::{ElementId, ElementTree};
use kryon_testing::{props, TreeBuilder};

use crate::{LayoutConfig, LayoutEngine};

fn geometry(tree: &ElementTree, id: ElementId) -> (f32, f32, f32, f32) {
    let element = tree.get(id).unwrap();
    (element.x, element.y, element.width, element.height)
}

fn origin(tree: &ElementTree, id: ElementId) -> (f32, f32) {
    let element = tree.get(id).unwrap();
    (element.x, element.y)
}

fn layout(tree: &mut ElementTree, root: ElementId) {
    LayoutEngine::default().force_layout(tree, root);
}

fn app(builder: &mut TreeBuilder) -> ElementId {
    builder.root("App", props! { "windowWidth" => 800.0, "windowHeight" => 600.0 })
}

#[test]
fn row_space_between_spreads_children() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let row = builder.child(
        root,
        "Row",
        props! {
            "width" => 220.0,
            "height" => 100.0,
            "padding" => 10.0,
            "gap" => 10.0,
            "mainAxisAlignment" => "spaceBetween",
        },
    );
    let children = builder.children(row, "Text", 3, props! { "width" => 50.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(geometry(&tree, row), (0.0, 0.0, 220.0, 100.0));
    let xs: Vec<f32> = children.iter().map(|id| origin(&tree, *id).0).collect();
    assert_eq!(xs, vec![10.0, 85.0, 160.0]);
    assert_eq!(geometry(&tree, children[0]), (10.0, 10.0, 50.0, 50.0));
}

#[test]
fn row_center_shifts_start_by_half_the_slack() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let no_gap = builder.child(
        root,
        "Row",
        props! { "width" => 200.0, "height" => 50.0, "mainAxisAlignment" => "center" },
    );
    let first = builder.children(no_gap, "Text", 3, props! { "width" => 50.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(origin(&tree, first[0]).0, 25.0);
    assert_eq!(origin(&tree, first[2]).0, 125.0);
}

#[test]
fn row_center_counts_gaps() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let row = builder.child(
        root,
        "Row",
        props! {
            "width" => 200.0,
            "height" => 50.0,
            "gap" => 10.0,
            "mainAxisAlignment" => "center",
        },
    );
    let children = builder.children(row, "Text", 3, props! { "width" => 50.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);

    let xs: Vec<f32> = children.iter().map(|id| origin(&tree, *id).0).collect();
    assert_eq!(xs, vec![15.0, 75.0, 135.0]);
}

#[test]
fn row_cross_axis_alignment_offsets_vertically() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let centered = builder.child(
        root,
        "Row",
        props! { "width" => 300.0, "height" => 100.0, "crossAxisAlignment" => "center" },
    );
    let a = builder.child(centered, "Text", props! { "height" => 50.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);
    assert_eq!(origin(&tree, a), (0.0, 25.0));

    tree.get_mut(centered)
        .unwrap()
        .set_property("crossAxisAlignment", "end");
    layout(&mut tree, root);
    assert_eq!(origin(&tree, a), (0.0, 50.0));
}

#[test]
fn legacy_axis_property_names_are_honoured() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let row = builder.child(
        root,
        "Row",
        props! { "width" => 200.0, "height" => 50.0, "mainAxis" => "flex-end" },
    );
    let children = builder.children(row, "Text", 2, props! { "width" => 50.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(origin(&tree, children[0]).0, 100.0);
    assert_eq!(origin(&tree, children[1]).0, 150.0);
}

#[test]
fn column_stretch_forces_content_width() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let column = builder.child(
        root,
        "Column",
        props! {
            "width" => 300.0,
            "height" => 400.0,
            "padding" => 20.0,
            "crossAxisAlignment" => "stretch",
        },
    );
    let child = builder.child(column, "Text", props! { "width" => 50.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(geometry(&tree, child), (20.0, 20.0, 260.0, 50.0));
}

#[test]
fn column_main_axis_center_stacks_with_gap() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let column = builder.child(
        root,
        "Column",
        props! {
            "width" => 300.0,
            "height" => 400.0,
            "gap" => 20.0,
            "mainAxisAlignment" => "center",
            "crossAxisAlignment" => "center",
        },
    );
    let children = builder.children(column, "Button", 2, props! { "height" => 50.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(origin(&tree, children[0]), (100.0, 140.0));
    assert_eq!(origin(&tree, children[1]), (100.0, 210.0));
}

#[test]
fn container_aligns_each_child_independently() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let container = builder.child(
        root,
        "Container",
        props! { "width" => 400.0, "height" => 300.0, "contentAlignment" => "center" },
    );
    let leaf = builder.child(container, "Text", props! {});
    let nested = builder.child(container, "Column", props! {});
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(geometry(&tree, leaf), (150.0, 125.0, 100.0, 50.0));
    assert_eq!(geometry(&tree, nested), (0.0, 0.0, 400.0, 300.0));
}

#[test]
fn center_ignores_content_alignment() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let center = builder.child(
        root,
        "Center",
        props! { "width" => 400.0, "height" => 300.0, "contentAlignment" => "start" },
    );
    let child = builder.child(center, "Text", props! { "width" => 200.0, "height" => 100.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(origin(&tree, child), (100.0, 100.0));
}

#[test]
fn app_uses_its_own_geometry_as_content_box() {
    let mut builder = TreeBuilder::new();
    let root = builder.root(
        "App",
        props! {
            "windowWidth" => 800.0,
            "windowHeight" => 600.0,
            "contentAlignment" => "centerX",
        },
    );
    let child = builder.child(root, "Text", props! { "width" => 200.0, "height" => 100.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(geometry(&tree, root), (0.0, 0.0, 800.0, 600.0));
    assert_eq!(origin(&tree, child), (300.0, 0.0));
}

#[test]
fn grid_places_row_major_and_clamps_to_cell() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let grid = builder.child(
        root,
        "Grid",
        props! { "width" => 210.0, "height" => 110.0, "columns" => 2, "gap" => 10.0 },
    );
    let a = builder.child(grid, "Text", props! {});
    let b = builder.child(grid, "Text", props! { "width" => 500.0 });
    let c = builder.child(grid, "Text", props! { "width" => 40.0 });
    let d = builder.child(grid, "Text", props! {});
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(geometry(&tree, a), (0.0, 0.0, 100.0, 50.0));
    assert_eq!(geometry(&tree, b), (110.0, 0.0, 100.0, 50.0));
    assert_eq!(geometry(&tree, c), (0.0, 60.0, 40.0, 50.0));
    assert_eq!(geometry(&tree, d), (110.0, 60.0, 100.0, 50.0));
}

#[test]
fn grid_defaults_to_three_columns_and_ten_pixel_gap() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let grid = builder.child(root, "Grid", props! { "width" => 320.0, "height" => 50.0 });
    let cells = builder.children(grid, "Text", 3, props! {});
    let mut tree = builder.build();

    layout(&mut tree, root);

    let xs: Vec<f32> = cells.iter().map(|id| origin(&tree, *id).0).collect();
    assert_eq!(xs, vec![0.0, 110.0, 220.0]);
}

#[test]
fn unknown_types_pass_their_rectangle_through() {
    let mut builder = TreeBuilder::new();
    let root = builder.root(
        "App",
        props! {
            "windowWidth" => 800.0,
            "windowHeight" => 600.0,
            "contentAlignment" => "center",
        },
    );
    let panel = builder.child(root, "Panel", props! { "width" => 300.0, "height" => 200.0 });
    let first = builder.child(panel, "Text", props! {});
    let second = builder.child(panel, "Button", props! {});
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(geometry(&tree, panel), (250.0, 200.0, 300.0, 200.0));
    assert_eq!(geometry(&tree, first), geometry(&tree, panel));
    assert_eq!(geometry(&tree, second), geometry(&tree, panel));
}

#[test]
fn explicit_position_overrides_one_axis() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let row = builder.child(root, "Row", props! { "width" => 400.0, "height" => 100.0 });
    let pinned = builder.child(row, "Text", props! { "posX" => 33.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(origin(&tree, pinned), (33.0, 0.0));
}

#[test]
fn missing_space_falls_back_to_default_sizes() {
    let mut builder = TreeBuilder::new();
    let row = builder.root("Row", props! { "windowWidth" => 0.0, "windowHeight" => 0.0 });
    let mut tree = builder.build();
    layout(&mut tree, row);
    assert_eq!(geometry(&tree, row), (0.0, 0.0, 400.0, 300.0));

    let mut builder = TreeBuilder::new();
    let text = builder.root("Text", props! { "windowWidth" => 0.0, "windowHeight" => 0.0 });
    let mut tree = builder.build();
    layout(&mut tree, text);
    assert_eq!(geometry(&tree, text), (0.0, 0.0, 100.0, 50.0));
}

#[test]
fn window_defaults_to_800_by_600() {
    let mut builder = TreeBuilder::new();
    let root = builder.root("App", props! {});
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(geometry(&tree, root), (0.0, 0.0, 800.0, 600.0));
}

fn sample_tree() -> (ElementTree, ElementId, Vec<ElementId>) {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let column = builder.child(
        root,
        "Column",
        props! { "padding" => 8.0, "gap" => 4.0, "mainAxisAlignment" => "spaceEvenly" },
    );
    let row = builder.child(
        column,
        "Row",
        props! { "height" => 120.0, "mainAxisAlignment" => "spaceAround" },
    );
    let mut ids = vec![root, column, row];
    ids.extend(builder.children(row, "Button", 3, props! { "width" => 60.0 }));
    let grid = builder.child(column, "Grid", props! { "height" => 200.0 });
    ids.push(grid);
    ids.extend(builder.children(grid, "Text", 5, props! {}));
    (builder.build(), root, ids)
}

#[test]
fn layout_is_idempotent_on_unchanged_tree() {
    let (mut tree, root, ids) = sample_tree();
    let mut engine = LayoutEngine::default();
    engine.force_layout(&mut tree, root);
    let first: Vec<_> = ids.iter().map(|id| geometry(&tree, *id)).collect();

    engine.force_layout(&mut tree, root);

    let second: Vec<_> = ids.iter().map(|id| geometry(&tree, *id)).collect();
    assert_eq!(first, second);
    assert!(ids
        .iter()
        .all(|id| !tree.get(*id).unwrap().position_changed));
}

#[test]
fn moved_elements_are_flagged_for_render() {
    let (mut tree, root, ids) = sample_tree();
    let mut engine = LayoutEngine::default();
    engine.force_layout(&mut tree, root);
    for element in tree.iter_mut() {
        element.needs_render = false;
    }
    let moved = ids[3];
    let previous_y = origin(&tree, moved).1;
    tree.get_mut(moved).unwrap().set_property("posY", 500.0);

    engine.force_layout(&mut tree, root);

    let element = tree.get(moved).unwrap();
    assert!(element.position_changed);
    assert!(element.needs_render);
    assert_eq!(element.last_y, previous_y);
    assert_eq!(element.y, 500.0);
    assert!(!tree.get(ids[4]).unwrap().needs_render);
}

#[test]
fn small_moves_are_ignored() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let text = builder.child(root, "Text", props! { "posX" => 10.0 });
    let mut tree = builder.build();
    let mut engine = LayoutEngine::default();
    engine.force_layout(&mut tree, root);

    tree.get_mut(text).unwrap().set_property("posX", 10.05);
    engine.force_layout(&mut tree, root);

    assert!(!tree.get(text).unwrap().position_changed);
}

#[test]
fn pass_clears_needs_layout() {
    let (mut tree, root, ids) = sample_tree();
    assert!(tree.get(ids[0]).unwrap().needs_layout);

    layout(&mut tree, root);

    assert!(ids.iter().all(|id| !tree.get(*id).unwrap().needs_layout));
}

#[test]
fn repeated_calls_within_two_frames_are_skipped() {
    let (mut tree, root, ids) = sample_tree();
    let mut engine = LayoutEngine::new(LayoutConfig::default());

    assert!(engine.calculate_all_element_positions(&mut tree, root));
    assert!(!engine.calculate_all_element_positions(&mut tree, root));
    engine.advance_frame();
    assert!(!engine.calculate_all_element_positions(&mut tree, root));
    engine.advance_frame();
    assert!(engine.calculate_all_element_positions(&mut tree, root));

    tree.get_mut(ids[3]).unwrap().set_property("width", 70.0);
    assert!(engine.calculate_all_element_positions(&mut tree, root));
    assert_eq!(engine.passes(), 3);
}

#[test]
fn second_call_on_unchanged_tree_reports_nothing_moved() {
    let (mut tree, root, ids) = sample_tree();
    let watched = ids[4];
    tree.get_mut(watched).unwrap().behavior_state_mut();
    let mut engine = LayoutEngine::default();

    assert!(engine.calculate_all_element_positions(&mut tree, root));
    assert!(tree.get(watched).unwrap().position_changed);
    let first: Vec<_> = ids.iter().map(|id| geometry(&tree, *id)).collect();

    assert!(!engine.calculate_all_element_positions(&mut tree, root));

    let second: Vec<_> = ids.iter().map(|id| geometry(&tree, *id)).collect();
    assert_eq!(first, second);
    assert!(ids
        .iter()
        .all(|id| !tree.get(*id).unwrap().position_changed));
    let element = tree.get(watched).unwrap();
    assert!(!element.behavior_state().unwrap().position_changed);
    assert_eq!((element.last_x, element.last_y), (element.x, element.y));
}

#[test]
fn row_wrap_moves_overflowing_children_to_next_line() {
    let mut builder = TreeBuilder::new();
    let root = app(&mut builder);
    let row = builder.child(
        root,
        "Row",
        props! { "width" => 200.0, "height" => 200.0, "gap" => 10.0, "wrap" => "wrap" },
    );
    let children = builder.children(row, "Tag", 3, props! { "width" => 80.0, "height" => 30.0 });
    let mut tree = builder.build();

    layout(&mut tree, root);

    assert_eq!(origin(&tree, children[0]), (0.0, 0.0));
    assert_eq!(origin(&tree, children[1]), (90.0, 0.0));
    assert_eq!(origin(&tree, children[2]), (0.0, 40.0));
}
