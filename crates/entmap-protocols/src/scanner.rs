//! Discovery protocol over search locations.

use crate::entity::EntityDescriptor;
use crate::marker::MarkerKind;

/// Trait for discovery over a search location.
///
/// A location is a namespace prefix; nested namespaces are included.
/// Implementations return every type under the location carrying at least
/// one of the requested markers, in stable per-location order. Unknown
/// locations yield an empty result rather than an error.
pub trait EntityScanner: Send + Sync {
    /// Scan one location for types carrying any of the given markers.
    fn scan(&self, location: &str, markers: &[MarkerKind]) -> Vec<EntityDescriptor>;
}
