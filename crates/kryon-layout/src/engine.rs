//! Recursive positioning pass.
//!
//! Every element is visited once, parent before children. A parent decides
//! each child's slot (origin plus available size); the child then resolves
//! its own position and size against that slot and positions its children in
//! turn.

use kryon_core::{Element, ElementId, ElementTree, Size};

use crate::strategies;

/// Width and height of leaves with no explicit size.
pub const DEFAULT_LEAF_SIZE: Size = Size {
    width: 100.0,
    height: 50.0,
};

/// Size of Row and Column containers when the parent offers no space.
pub const DEFAULT_FLOW_SIZE: Size = Size {
    width: 400.0,
    height: 300.0,
};

/// Movement below this many pixels is treated as float noise.
pub const POSITION_EPSILON: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Used when the root has no `windowWidth`/`windowHeight` properties.
    pub default_window: Size,
    /// Repeated passes for the same root within this many frames are skipped.
    pub debounce_frames: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_window: Size::new(800.0, 600.0),
            debounce_frames: 2,
        }
    }
}

/// How an element arranges its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    Row,
    Column,
    Container,
    Center,
    App,
    Grid,
    /// Children receive the parent's own rectangle.
    PassThrough,
}

impl LayoutKind {
    pub fn of(type_name: &str) -> Self {
        match type_name {
            "Row" => LayoutKind::Row,
            "Column" => LayoutKind::Column,
            "Container" => LayoutKind::Container,
            "Center" => LayoutKind::Center,
            "App" => LayoutKind::App,
            "Grid" => LayoutKind::Grid,
            _ => LayoutKind::PassThrough,
        }
    }

    pub fn is_flow(self) -> bool {
        matches!(self, LayoutKind::Row | LayoutKind::Column)
    }

    /// Whether elements of this kind lay out children at all; such elements
    /// fill the space offered to them.
    pub fn is_container(self) -> bool {
        !matches!(self, LayoutKind::PassThrough)
    }
}

/// Rectangle a parent offers a child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Slot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Imposed sizes override the child's explicit `width`/`height`.
    pub exact_width: bool,
    pub exact_height: bool,
}

impl Slot {
    pub fn available(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            exact_width: false,
            exact_height: false,
        }
    }
}

/// Resolves width and height of `element` against the space it was offered.
fn resolve_size(element: &Element, slot: &Slot) -> Size {
    let flow = LayoutKind::of(&element.type_name).is_flow();
    let fallback = if flow {
        DEFAULT_FLOW_SIZE
    } else {
        DEFAULT_LEAF_SIZE
    };
    let resolve = |exact: bool, property: &str, offered: f32, default: f32| {
        if exact {
            return offered;
        }
        let explicit = element.properties.float(property, 0.0);
        if explicit > 0.0 {
            explicit
        } else if offered > 0.0 {
            offered
        } else {
            default
        }
    };
    Size::new(
        resolve(slot.exact_width, "width", slot.width, fallback.width),
        resolve(slot.exact_height, "height", slot.height, fallback.height),
    )
}

pub(crate) fn layout_element(tree: &mut ElementTree, id: ElementId, slot: Slot) {
    let kind = {
        let Ok(element) = tree.get_mut(id) else {
            return;
        };
        element.last_x = element.x;
        element.last_y = element.y;

        let pos_x = element.properties.float("posX", 0.0);
        let pos_y = element.properties.float("posY", 0.0);
        element.x = if pos_x != 0.0 { pos_x } else { slot.x };
        element.y = if pos_y != 0.0 { pos_y } else { slot.y };

        let size = resolve_size(element, &slot);
        element.width = size.width;
        element.height = size.height;

        element.position_changed = (element.x - element.last_x).abs() > POSITION_EPSILON
            || (element.y - element.last_y).abs() > POSITION_EPSILON;
        element.needs_layout = false;
        LayoutKind::of(&element.type_name)
    };
    strategies::position_children(tree, id, kind);
}

/// Positions `element` at the parent-supplied origin with the given
/// available space, then recursively positions its subtree.
pub fn calculate_element_position_recursive(
    tree: &mut ElementTree,
    element: ElementId,
    parent_x: f32,
    parent_y: f32,
    available_width: f32,
    available_height: f32,
) {
    layout_element(
        tree,
        element,
        Slot::available(parent_x, parent_y, available_width, available_height),
    );
}

/// Sets `needs_render` on every element of the subtree that moved during the
/// last pass and mirrors the flag into existing behavior state.
pub fn update_render_flags(tree: &mut ElementTree, root: ElementId) {
    for id in tree.descendants(root) {
        let Ok(element) = tree.get_mut(id) else {
            continue;
        };
        let moved = element.position_changed;
        if moved {
            element.needs_render = true;
        }
        if element.has_behavior_state() {
            element.behavior_state_mut().position_changed = moved;
        }
    }
}

/// Frame-aware entry point to the layout pass.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
    frame: u64,
    last_pass: Option<(ElementId, u64)>,
    passes: u64,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Advances the frame counter used for debouncing.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of passes that actually ran.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Lays out the tree under `root` unless the same root was laid out less
    /// than `debounce_frames` frames ago and nothing in it asked for layout.
    /// Returns whether a pass ran.
    pub fn calculate_all_element_positions(
        &mut self,
        tree: &mut ElementTree,
        root: ElementId,
    ) -> bool {
        if let Some((last_root, last_frame)) = self.last_pass {
            let recent = self.frame < last_frame + self.config.debounce_frames;
            if last_root == root && recent && !subtree_needs_layout(tree, root) {
                log::trace!("layout for {root} skipped; ran at frame {last_frame}");
                settle_positions(tree, root);
                return false;
            }
        }
        self.force_layout(tree, root);
        true
    }

    /// Runs a full pass regardless of debouncing.
    pub fn force_layout(&mut self, tree: &mut ElementTree, root: ElementId) {
        let Ok(element) = tree.get(root) else {
            return;
        };
        let window = Size::new(
            element
                .properties
                .float("windowWidth", self.config.default_window.width),
            element
                .properties
                .float("windowHeight", self.config.default_window.height),
        );
        log::trace!(
            "layout pass for {root} at frame {} ({}x{})",
            self.frame,
            window.width,
            window.height
        );
        calculate_element_position_recursive(tree, root, 0.0, 0.0, window.width, window.height);
        update_render_flags(tree, root);
        self.last_pass = Some((root, self.frame));
        self.passes += 1;
    }
}

/// Records the current geometry as the previous one and clears
/// `position_changed`, which is what a pass over an unchanged subtree does.
fn settle_positions(tree: &mut ElementTree, root: ElementId) {
    for id in tree.descendants(root) {
        let Ok(element) = tree.get_mut(id) else {
            continue;
        };
        element.last_x = element.x;
        element.last_y = element.y;
        element.position_changed = false;
        if element.has_behavior_state() {
            element.behavior_state_mut().position_changed = false;
        }
    }
}

fn subtree_needs_layout(tree: &ElementTree, root: ElementId) -> bool {
    tree.descendants(root)
        .into_iter()
        .any(|id| tree.get(id).map(|element| element.needs_layout).unwrap_or(false))
}
