use std::rc::Rc;

use kryon_core::collections::map::HashMap;

use crate::{Behavior, BehaviorId, RegistryError};

pub const DEFAULT_MAX_BEHAVIORS: usize = 32;

/// Name-keyed store of behaviors. Names are interned to [`BehaviorId`]s on
/// registration so composition never compares strings again.
#[derive(Debug)]
pub struct BehaviorRegistry {
    behaviors: Vec<Rc<Behavior>>,
    by_name: HashMap<String, BehaviorId>,
    capacity: usize,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_BEHAVIORS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            behaviors: Vec::new(),
            by_name: HashMap::default(),
            capacity: capacity.min(u16::MAX as usize),
        }
    }

    pub fn register(&mut self, behavior: Behavior) -> Result<BehaviorId, RegistryError> {
        if self.by_name.contains_key(behavior.name()) {
            return Err(RegistryError::DuplicateBehavior {
                name: behavior.name().to_owned(),
            });
        }
        if self.behaviors.len() >= self.capacity {
            return Err(RegistryError::BehaviorCapacity {
                capacity: self.capacity,
            });
        }
        let id = BehaviorId(self.behaviors.len() as u16);
        self.by_name.insert(behavior.name().to_owned(), id);
        self.behaviors.push(Rc::new(behavior));
        Ok(id)
    }

    pub fn lookup(&self, name: &str) -> Option<BehaviorId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: BehaviorId) -> Option<&Rc<Behavior>> {
        self.behaviors.get(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&Rc<Behavior>> {
        self.lookup(name).and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.behaviors.iter().map(|behavior| behavior.name())
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
