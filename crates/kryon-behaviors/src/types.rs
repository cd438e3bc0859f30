use std::rc::Rc;

use indexmap::IndexMap;

use crate::{ComposedVTable, RegistryError};

pub const DEFAULT_MAX_ELEMENT_TYPES: usize = 32;

/// Bounded `type name -> vtable` table. Exactly one vtable is live per name.
#[derive(Debug)]
pub struct ElementTypeRegistry {
    types: IndexMap<String, Rc<ComposedVTable>>,
    capacity: usize,
}

impl ElementTypeRegistry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ELEMENT_TYPES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            types: IndexMap::new(),
            capacity,
        }
    }

    /// Publishes `vtable` under its type name. An existing entry is replaced
    /// with a warning; replacing never counts against capacity.
    pub fn register(&mut self, vtable: ComposedVTable) -> Result<Rc<ComposedVTable>, RegistryError> {
        let type_name = vtable.type_name().to_owned();
        if !self.types.contains_key(&type_name) && self.types.len() >= self.capacity {
            return Err(RegistryError::TypeCapacity {
                capacity: self.capacity,
            });
        }
        let vtable = Rc::new(vtable);
        if self.types.insert(type_name.clone(), Rc::clone(&vtable)).is_some() {
            log::warn!("element type '{type_name}' re-registered; previous definition replaced");
        }
        Ok(vtable)
    }

    /// `None` is the normal answer for types nobody registered.
    pub fn get(&self, type_name: &str) -> Option<Rc<ComposedVTable>> {
        self.types.get(type_name).cloned()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

impl Default for ElementTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
