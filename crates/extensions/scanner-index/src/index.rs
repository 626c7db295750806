//! In-process entity type index.

use parking_lot::RwLock;
use tracing::debug;

use entmap_protocols::entity::{EntityDescriptor, EntityType};
use entmap_protocols::error::ResolveError;
use entmap_protocols::marker::MarkerKind;
use entmap_protocols::resolver::TypeResolver;
use entmap_protocols::scanner::EntityScanner;

/// Index of entity type records submitted by the application.
///
/// Submission order is preserved and defines discovery order within a
/// location. A location matches a record when it equals the record's
/// namespace or is an ancestor namespace of it. Resubmitting a name
/// replaces the earlier record in place.
pub struct TypeIndex {
    records: RwLock<Vec<EntityType>>,
}

impl TypeIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Submit a type record.
    pub fn submit(&self, ty: EntityType) {
        let mut records = self.records.write();
        match records.iter_mut().find(|r| r.name == ty.name) {
            Some(existing) => *existing = ty,
            None => records.push(ty),
        }
    }

    /// Number of submitted records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn location_matches(location: &str, namespace: &str) -> bool {
        namespace == location
            || namespace
                .strip_prefix(location)
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl Default for TypeIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityScanner for TypeIndex {
    fn scan(&self, location: &str, markers: &[MarkerKind]) -> Vec<EntityDescriptor> {
        let records = self.records.read();
        let found: Vec<EntityDescriptor> = records
            .iter()
            .filter(|ty| Self::location_matches(location, ty.namespace()))
            .filter(|ty| ty.carries_any(markers))
            .map(|ty| ty.descriptor())
            .collect();
        debug!("Scanned {}: {} candidates", location, found.len());
        found
    }
}

impl TypeResolver for TypeIndex {
    fn resolve(&self, name: &str) -> Result<EntityType, ResolveError> {
        self.records
            .read()
            .iter()
            .find(|ty| ty.name == name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))
    }
}
