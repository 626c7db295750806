//! Mapping registry implementation.

use dashmap::DashMap;

use entmap_protocols::entity::{EntityMetadata, EntityType};
use entmap_protocols::error::MappingError;

/// Registry mapping type names to persistence metadata.
///
/// Built once by the registrar during initialization and treated as
/// read-only afterward. Registration is idempotent per type: registering
/// the same type name a second time is a no-op. Two distinct types cannot
/// map to the same storage kind.
pub struct MappingRegistry {
    entries: DashMap<String, EntityMetadata>,
    kinds: DashMap<String, String>,
}

impl MappingRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            kinds: DashMap::new(),
        }
    }

    /// Register an entity type.
    ///
    /// The storage kind is the explicit override if present, otherwise the
    /// simple name. Fails when the type carries no marker, has no
    /// identifier field, or its kind is already owned by a different type.
    pub fn register(&self, ty: &EntityType) -> Result<(), MappingError> {
        if ty.markers.is_empty() {
            return Err(MappingError::NotAnEntity(ty.name.clone()));
        }
        let id_field = ty
            .id_field
            .clone()
            .ok_or_else(|| MappingError::MissingIdentifier(ty.name.clone()))?;

        if self.entries.contains_key(&ty.name) {
            return Ok(());
        }

        let kind = ty
            .kind
            .clone()
            .unwrap_or_else(|| ty.simple_name().to_string());
        if let Some(existing) = self.kinds.get(&kind) {
            return Err(MappingError::KindCollision {
                kind: kind.clone(),
                existing: existing.value().clone(),
                incoming: ty.name.clone(),
            });
        }

        let metadata = EntityMetadata {
            type_name: ty.name.clone(),
            kind: kind.clone(),
            id_field,
            markers: ty.markers.clone(),
        };
        self.kinds.insert(kind, ty.name.clone());
        self.entries.insert(ty.name.clone(), metadata);
        Ok(())
    }

    /// Get metadata for a registered type.
    pub fn metadata(&self, type_name: &str) -> Option<EntityMetadata> {
        self.entries.get(type_name).map(|e| e.value().clone())
    }

    /// Type name owning a storage kind.
    pub fn type_for_kind(&self, kind: &str) -> Option<String> {
        self.kinds.get(kind).map(|e| e.value().clone())
    }

    /// Check if a type is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// List all registered type names.
    pub fn type_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key().clone()).collect()
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
