//! Entity descriptors, resolved types, and mapping metadata.

use serde::{Deserialize, Serialize};

use crate::marker::MarkerKind;

/// Opaque handle identifying a loadable type by fully-qualified name.
///
/// Names are dot-separated, e.g. `acme.garage.Car`. The descriptor is not
/// otherwise interpreted; resolving it into an [`EntityType`] is the job
/// of a [`crate::resolver::TypeResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityDescriptor {
    /// Fully-qualified, dot-separated type name.
    pub name: String,
}

impl EntityDescriptor {
    /// Create a descriptor for the given type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for EntityDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A resolved entity type as produced by a type resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityType {
    /// Fully-qualified, dot-separated type name.
    pub name: String,

    /// Markers the type carries.
    #[serde(default)]
    pub markers: Vec<MarkerKind>,

    /// Explicit storage-kind override. Defaults to the simple name.
    #[serde(default)]
    pub kind: Option<String>,

    /// Name of the identifier field, required for registration.
    #[serde(default)]
    pub id_field: Option<String>,
}

impl EntityType {
    /// Create an unmarked type with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
            kind: None,
            id_field: None,
        }
    }

    /// Attach a marker.
    pub fn with_marker(mut self, marker: MarkerKind) -> Self {
        if !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    /// Override the storage kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the identifier field name.
    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = Some(field.into());
        self
    }

    /// Last dot-separated segment of the type name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Namespace prefix of the type name, empty for top-level names.
    pub fn namespace(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }

    /// Whether the type carries the given marker.
    pub fn carries(&self, marker: MarkerKind) -> bool {
        self.markers.contains(&marker)
    }

    /// Whether the type carries at least one of the given markers.
    pub fn carries_any(&self, markers: &[MarkerKind]) -> bool {
        markers.iter().any(|m| self.carries(*m))
    }

    /// Descriptor naming this type.
    pub fn descriptor(&self) -> EntityDescriptor {
        EntityDescriptor::new(&self.name)
    }
}

/// Persistence metadata held by the registry for one registered type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Fully-qualified type name.
    pub type_name: String,

    /// Storage kind the type maps to.
    pub kind: String,

    /// Identifier field name.
    pub id_field: String,

    /// Markers the type carried at registration.
    pub markers: Vec<MarkerKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_new() {
        let desc = EntityDescriptor::new("acme.garage.Car");
        assert_eq!(desc.name, "acme.garage.Car");
        assert_eq!(desc.to_string(), "acme.garage.Car");
    }

    #[test]
    fn test_simple_name() {
        let ty = EntityType::new("acme.garage.Car");
        assert_eq!(ty.simple_name(), "Car");
    }

    #[test]
    fn test_simple_name_top_level() {
        let ty = EntityType::new("Car");
        assert_eq!(ty.simple_name(), "Car");
    }

    #[test]
    fn test_namespace() {
        let ty = EntityType::new("acme.garage.Car");
        assert_eq!(ty.namespace(), "acme.garage");
    }

    #[test]
    fn test_namespace_top_level() {
        let ty = EntityType::new("Car");
        assert_eq!(ty.namespace(), "");
    }

    #[test]
    fn test_with_marker_deduplicates() {
        let ty = EntityType::new("acme.garage.Car")
            .with_marker(MarkerKind::Persistence)
            .with_marker(MarkerKind::Persistence);
        assert_eq!(ty.markers.len(), 1);
    }

    #[test]
    fn test_carries() {
        let ty = EntityType::new("acme.garage.Car").with_marker(MarkerKind::Persistence);
        assert!(ty.carries(MarkerKind::Persistence));
        assert!(!ty.carries(MarkerKind::Domain));
    }

    #[test]
    fn test_carries_any_is_or_combined() {
        let persistence_only =
            EntityType::new("acme.garage.Car").with_marker(MarkerKind::Persistence);
        let domain_only = EntityType::new("other.coverage.Insurance").with_marker(MarkerKind::Domain);

        assert!(persistence_only.carries_any(&MarkerKind::ALL));
        assert!(domain_only.carries_any(&MarkerKind::ALL));
        assert!(!domain_only.carries_any(&[MarkerKind::Persistence]));
    }

    #[test]
    fn test_carries_any_unmarked() {
        let ty = EntityType::new("acme.garage.Car");
        assert!(!ty.carries_any(&MarkerKind::ALL));
    }

    #[test]
    fn test_descriptor_round_trip() {
        let ty = EntityType::new("acme.garage.Car").with_marker(MarkerKind::Domain);
        assert_eq!(ty.descriptor(), EntityDescriptor::new("acme.garage.Car"));
    }

    #[test]
    fn test_builder() {
        let ty = EntityType::new("acme.garage.Car")
            .with_marker(MarkerKind::Persistence)
            .with_kind("vehicles")
            .with_id_field("id");
        assert_eq!(ty.kind.as_deref(), Some("vehicles"));
        assert_eq!(ty.id_field.as_deref(), Some("id"));
    }
}
