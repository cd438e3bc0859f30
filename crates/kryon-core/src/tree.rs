//! Arena storage for the element tree.

use std::fmt;

use crate::{BehaviorState, Element, ElementId, PropertyBag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    Missing { id: ElementId },
    Stale { id: ElementId },
    Cycle { parent: ElementId, child: ElementId },
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementError::Missing { id } => write!(f, "element {id} missing"),
            ElementError::Stale { id } => write!(f, "element {id} was removed"),
            ElementError::Cycle { parent, child } => {
                write!(f, "attaching {child} under {parent} would create a cycle")
            }
        }
    }
}

impl std::error::Error for ElementError {}

struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// Parent-owned element tree backed by a generational arena.
///
/// Parents own their children: removing an element removes its whole
/// subtree. Parent links are plain handles and are only used for lookups.
#[derive(Default)]
pub struct ElementTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
    update_requested: bool,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element and returns its handle.
    pub fn insert(&mut self, type_name: impl Into<String>, properties: PropertyBag) -> ElementId {
        let type_name = type_name.into();
        let id = match self.free.pop() {
            Some(index) => ElementId {
                index,
                generation: self.slots[index as usize].generation,
            },
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    element: None,
                });
                ElementId {
                    index: (self.slots.len() - 1) as u32,
                    generation: 0,
                }
            }
        };
        self.slots[id.index as usize].element = Some(Element::new(id, type_name, properties));
        self.len += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_ok()
    }

    pub fn get(&self, id: ElementId) -> Result<&Element, ElementError> {
        let slot = self
            .slots
            .get(id.index as usize)
            .ok_or(ElementError::Missing { id })?;
        if slot.generation != id.generation {
            return Err(ElementError::Stale { id });
        }
        slot.element.as_ref().ok_or(ElementError::Missing { id })
    }

    pub fn get_mut(&mut self, id: ElementId) -> Result<&mut Element, ElementError> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .ok_or(ElementError::Missing { id })?;
        if slot.generation != id.generation {
            return Err(ElementError::Stale { id });
        }
        slot.element.as_mut().ok_or(ElementError::Missing { id })
    }

    /// Lazily creates and returns the behavior state of `id`.
    pub fn behavior_state_mut(
        &mut self,
        id: ElementId,
    ) -> Result<&mut BehaviorState, ElementError> {
        Ok(self.get_mut(id)?.behavior_state_mut())
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).ok().and_then(Element::parent)
    }

    /// Children of `id` in declaration order; empty for unknown handles.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(Element::children).unwrap_or(&[])
    }

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(
        &mut self,
        parent: ElementId,
        child: ElementId,
    ) -> Result<(), ElementError> {
        self.get(parent)?;
        self.get(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(ElementError::Cycle { parent, child });
        }
        self.detach(child)?;
        self.get_mut(parent)?.children.push(child);
        let element = self.get_mut(child)?;
        element.parent = Some(parent);
        element.needs_layout = true;
        Ok(())
    }

    /// Unlinks `id` from its parent. The element stays alive as a root.
    pub fn detach(&mut self, id: ElementId) -> Result<(), ElementError> {
        let Some(parent) = self.get(id)?.parent else {
            return Ok(());
        };
        if let Ok(parent_element) = self.get_mut(parent) {
            parent_element.children.retain(|child| *child != id);
        }
        self.get_mut(id)?.parent = None;
        Ok(())
    }

    /// Removes `id` and its entire subtree, returning how many elements were
    /// dropped. Handles to removed elements report [`ElementError::Stale`].
    pub fn remove(&mut self, id: ElementId) -> Result<usize, ElementError> {
        self.detach(id)?;
        let doomed = self.descendants(id);
        for element_id in &doomed {
            let slot = &mut self.slots[element_id.index as usize];
            slot.element = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(element_id.index);
        }
        self.len -= doomed.len();
        Ok(doomed.len())
    }

    /// `root` followed by every descendant, pre-order.
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        if !self.contains(root) {
            return out;
        }
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    fn is_ancestor_or_self(&self, ancestor: ElementId, mut id: ElementId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.parent(id) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    /// Every live element, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.slots.iter().filter_map(|slot| slot.element.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.slots.iter_mut().filter_map(|slot| slot.element.as_mut())
    }

    /// Flags every element for re-rendering and records an update request.
    pub fn mark_all_needs_render(&mut self) {
        for element in self.iter_mut() {
            element.needs_render = true;
        }
        self.update_requested = true;
    }

    pub fn request_update(&mut self) {
        self.update_requested = true;
    }

    /// Returns whether an update was requested since the last call.
    pub fn take_update_request(&mut self) -> bool {
        std::mem::take(&mut self.update_requested)
    }

    pub fn dump_tree(&self, root: Option<ElementId>) -> String {
        let mut output = String::new();
        match root {
            Some(root) => self.dump_node(&mut output, root, 0),
            None => output.push_str("(no root)\n"),
        }
        output
    }

    fn dump_node(&self, output: &mut String, id: ElementId, depth: usize) {
        let indent = "  ".repeat(depth);
        match self.get(id) {
            Ok(element) => {
                output.push_str(&format!(
                    "{indent}[{id}] {} ({}, {}, {}x{})\n",
                    element.type_name, element.x, element.y, element.width, element.height
                ));
                for child in element.children() {
                    self.dump_node(output, *child, depth + 1);
                }
            }
            Err(_) => output.push_str(&format!("{indent}[{id}] (missing)\n")),
        }
    }
}

impl fmt::Debug for ElementTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementTree")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}
