//! Layout engine for Kryon element trees.
//!
//! [`LayoutEngine::calculate_all_element_positions`] assigns absolute
//! geometry to every element under a root in one recursive pass. How a
//! parent arranges its children is picked from its type name
//! ([`LayoutKind`]); unknown types hand their own rectangle to every child.

mod alignment;
mod arrangement;
mod axis;
mod engine;
mod strategies;

pub use alignment::{ContentAlignment, CrossAxisAlignment, MainAxisAlignment};
pub use axis::Axis;
pub use engine::{
    calculate_element_position_recursive, update_render_flags, LayoutConfig, LayoutEngine,
    LayoutKind, DEFAULT_FLOW_SIZE, DEFAULT_LEAF_SIZE, POSITION_EPSILON,
};

pub mod prelude {
    pub use crate::alignment::{ContentAlignment, CrossAxisAlignment, MainAxisAlignment};
    pub use crate::engine::{LayoutConfig, LayoutEngine};
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod layout_tests;
