//! Per-container child positioning, selected by the parent's type name.

use kryon_core::{Element, ElementId, ElementTree, Rect, Size};

use crate::engine::{layout_element, Slot, DEFAULT_LEAF_SIZE};
use crate::{Axis, ContentAlignment, CrossAxisAlignment, LayoutKind, MainAxisAlignment};

pub(crate) fn position_children(tree: &mut ElementTree, parent: ElementId, kind: LayoutKind) {
    let Ok(element) = tree.get(parent) else {
        return;
    };
    if element.children().is_empty() {
        return;
    }
    let children = element.children().to_vec();
    let slots = match kind {
        LayoutKind::Row => flow_slots(tree, element, &children, Axis::Horizontal),
        LayoutKind::Column => flow_slots(tree, element, &children, Axis::Vertical),
        LayoutKind::Container | LayoutKind::App => {
            let alignment = ContentAlignment::from_properties(&element.properties);
            box_slots(tree, element, &children, alignment)
        }
        LayoutKind::Center => box_slots(tree, element, &children, ContentAlignment::Center),
        LayoutKind::Grid => grid_slots(tree, element, &children),
        LayoutKind::PassThrough => {
            let bounds = element.bounds();
            let slot = Slot::available(bounds.x, bounds.y, bounds.width, bounds.height);
            vec![slot; children.len()]
        }
    };
    for (child, slot) in children.into_iter().zip(slots) {
        layout_element(tree, child, slot);
    }
}

fn content_box(element: &Element) -> Rect {
    element
        .bounds()
        .inset(element.properties.float("padding", 0.0))
}

/// Size a child asks for: explicit properties first, then the content extent
/// for nested containers on `fill` axes, then the leaf default.
fn measure_child(child: &Element, fill: Size, fill_width: bool, fill_height: bool) -> Size {
    let container = LayoutKind::of(&child.type_name).is_container();
    let pick = |property: &str, fill_allowed: bool, fill_extent: f32, default: f32| {
        let explicit = child.properties.float(property, 0.0);
        if explicit > 0.0 {
            explicit
        } else if container && fill_allowed {
            fill_extent
        } else {
            default
        }
    };
    Size::new(
        pick("width", fill_width, fill.width, DEFAULT_LEAF_SIZE.width),
        pick("height", fill_height, fill.height, DEFAULT_LEAF_SIZE.height),
    )
}

fn measure_all(
    tree: &ElementTree,
    children: &[ElementId],
    fill: Size,
    fill_width: bool,
    fill_height: bool,
) -> Vec<Size> {
    children
        .iter()
        .map(|id| match tree.get(*id) {
            Ok(child) => measure_child(child, fill, fill_width, fill_height),
            Err(_) => Size::ZERO,
        })
        .collect()
}

fn wraps(element: &Element) -> bool {
    let wrap = element
        .properties
        .string("wrap")
        .or_else(|| element.properties.string("flexWrap"));
    matches!(wrap, Some("wrap") | Some("true")) || element.properties.bool("wrap", false)
}

/// Row and Column. Children keep their main-axis size and are distributed by
/// `mainAxisAlignment`; each is offset on the cross axis by
/// `crossAxisAlignment`.
fn flow_slots(
    tree: &ElementTree,
    parent: &Element,
    children: &[ElementId],
    axis: Axis,
) -> Vec<Slot> {
    let content = content_box(parent);
    let content_size = Size::new(content.width, content.height);
    let gap = parent.properties.float("gap", 0.0);
    let cross_alignment = CrossAxisAlignment::from_properties(&parent.properties);

    let main_start = if axis.is_horizontal() { content.x } else { content.y };
    let cross_start = if axis.is_horizontal() { content.y } else { content.x };
    let main_extent = axis.extent(content_size);
    let cross_extent = axis.cross().extent(content_size);

    // Nested containers fill the cross axis only.
    let sizes = measure_all(
        tree,
        children,
        content_size,
        !axis.is_horizontal(),
        axis.is_horizontal(),
    );
    let stretch = cross_alignment == CrossAxisAlignment::Stretch;

    let slot_at = |main: f32, cross: f32, size: Size| {
        let main_size = axis.extent(size);
        let cross_size = if stretch {
            cross_extent
        } else {
            axis.cross().extent(size)
        };
        let origin = axis.point(main, cross);
        let size = axis.size(main_size, cross_size);
        Slot {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
            exact_width: stretch && !axis.is_horizontal(),
            exact_height: stretch && axis.is_horizontal(),
        }
    };

    if wraps(parent) {
        let mut slots = Vec::with_capacity(children.len());
        let mut main = main_start;
        let mut cross = cross_start;
        let mut line_extent = 0.0_f32;
        let mut line_empty = true;
        for size in &sizes {
            let main_size = axis.extent(*size);
            if !line_empty && main + main_size > main_start + main_extent {
                cross += line_extent + gap;
                main = main_start;
                line_extent = 0.0;
            }
            line_extent = line_extent.max(axis.cross().extent(*size));
            slots.push(slot_at(main, cross, *size));
            main += main_size + gap;
            line_empty = false;
        }
        return slots;
    }

    let main_sizes: Vec<f32> = sizes.iter().map(|size| axis.extent(*size)).collect();
    let mut offsets = vec![0.0; main_sizes.len()];
    MainAxisAlignment::from_properties(&parent.properties).arrange(
        main_extent,
        gap,
        &main_sizes,
        &mut offsets,
    );

    sizes
        .iter()
        .zip(offsets)
        .map(|(size, offset)| {
            let cross_size = if stretch {
                cross_extent
            } else {
                axis.cross().extent(*size)
            };
            let cross = cross_start + cross_alignment.offset(cross_extent, cross_size);
            slot_at(main_start + offset, cross, *size)
        })
        .collect()
}

/// Container, Center and App: every child is aligned independently inside
/// the content box; children do not flow relative to each other.
fn box_slots(
    tree: &ElementTree,
    parent: &Element,
    children: &[ElementId],
    alignment: ContentAlignment,
) -> Vec<Slot> {
    let content = content_box(parent);
    let content_size = Size::new(content.width, content.height);
    measure_all(tree, children, content_size, true, true)
        .into_iter()
        .map(|size| {
            let (dx, dy) = alignment.offset(
                (content.width, content.height),
                (size.width, size.height),
            );
            Slot::available(content.x + dx, content.y + dy, size.width, size.height)
        })
        .collect()
}

/// Uniform grid, filled row-major. Children never exceed their cell.
fn grid_slots(tree: &ElementTree, parent: &Element, children: &[ElementId]) -> Vec<Slot> {
    let properties = &parent.properties;
    let columns = properties.int("columns", 3).max(1) as usize;
    let gap = properties.float("gap", 10.0);
    let column_spacing = properties.float("column_spacing", gap);
    let row_spacing = properties.float("row_spacing", gap);
    let content = content_box(parent);

    let rows = children.len().div_ceil(columns);
    let cell_width = (content.width - column_spacing * (columns - 1) as f32) / columns as f32;
    let rows = rows.max(1);
    let cell_height = (content.height - row_spacing * (rows - 1) as f32) / rows as f32;

    children
        .iter()
        .enumerate()
        .map(|(index, id)| {
            let row = index / columns;
            let column = index % columns;
            let explicit = |property: &str, cell: f32| {
                let value = tree
                    .get(*id)
                    .map(|child| child.properties.float(property, 0.0))
                    .unwrap_or(0.0);
                if value > 0.0 {
                    value.min(cell)
                } else {
                    cell
                }
            };
            Slot {
                x: content.x + column as f32 * (cell_width + column_spacing),
                y: content.y + row as f32 * (cell_height + row_spacing),
                width: explicit("width", cell_width),
                height: explicit("height", cell_height),
                exact_width: true,
                exact_height: true,
            }
        })
        .collect()
}
