use std::fmt;

/// Why a registration was refused. A refused registration changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateBehavior { name: String },
    BehaviorCapacity { capacity: usize },
    UnknownBehavior { type_name: String, behavior: String },
    EmptyDefinition { type_name: String },
    TypeCapacity { capacity: usize },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateBehavior { name } => {
                write!(f, "behavior '{name}' already registered")
            }
            RegistryError::BehaviorCapacity { capacity } => {
                write!(f, "maximum number of behaviors ({capacity}) exceeded")
            }
            RegistryError::UnknownBehavior {
                type_name,
                behavior,
            } => write!(f, "behavior '{behavior}' not found for element '{type_name}'"),
            RegistryError::EmptyDefinition { type_name } => {
                write!(f, "element '{type_name}' has no behaviors")
            }
            RegistryError::TypeCapacity { capacity } => {
                write!(f, "maximum number of element types ({capacity}) exceeded")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
