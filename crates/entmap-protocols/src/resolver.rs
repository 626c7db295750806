//! Type resolution protocol.

use crate::entity::EntityType;
use crate::error::ResolveError;

/// Trait for loading a type by fully-qualified name.
pub trait TypeResolver: Send + Sync {
    /// Resolve the named type.
    fn resolve(&self, name: &str) -> Result<EntityType, ResolveError>;
}
