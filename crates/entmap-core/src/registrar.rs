//! Entity registrar: the single-pass registration component.

use std::any::TypeId;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::OnceCell;

use entmap_protocols::entity::EntityDescriptor;
use entmap_protocols::error::RegistrarError;
use entmap_protocols::marker::MarkerKind;
use entmap_protocols::observe::ObservationSink;
use entmap_protocols::resolver::TypeResolver;
use entmap_protocols::scanner::EntityScanner;

use crate::observe::TracingSink;
use crate::registry::MappingRegistry;

/// Delimiters recognized in a base-package string.
const LOCATION_DELIMITERS: &[char] = &[';', ',', ' ', '\t', '\n'];

/// Split a base-package string into search locations.
///
/// Empty segments are skipped rather than rejected.
pub fn split_locations(base_package: &str) -> Vec<&str> {
    base_package
        .split(LOCATION_DELIMITERS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Creates and exposes a fully-initialized [`MappingRegistry`].
///
/// The simplest way to use the registrar is to set a base package; every
/// type under it carrying a persistence or domain marker is discovered and
/// registered. Explicit descriptors can be supplied instead of, or in
/// addition to, discovery.
///
/// Collaborators are constructor-injected: the scanner answers discovery
/// over search locations, the resolver loads a type by name, and the
/// observation sink receives one informational event per registered type
/// plus start/completion events.
pub struct EntityRegistrar {
    base_package: Option<String>,
    entities: Vec<EntityDescriptor>,
    scanner: Arc<dyn EntityScanner>,
    resolver: Arc<dyn TypeResolver>,
    observer: Arc<dyn ObservationSink>,
    registry: OnceCell<Arc<MappingRegistry>>,
}

impl EntityRegistrar {
    /// Create a registrar with the default tracing-backed sink.
    pub fn new(scanner: Arc<dyn EntityScanner>, resolver: Arc<dyn TypeResolver>) -> Self {
        Self::with_observer(scanner, resolver, Arc::new(TracingSink))
    }

    /// Create a registrar with an explicit observation sink.
    pub fn with_observer(
        scanner: Arc<dyn EntityScanner>,
        resolver: Arc<dyn TypeResolver>,
        observer: Arc<dyn ObservationSink>,
    ) -> Self {
        Self {
            base_package: None,
            entities: Vec::new(),
            scanner,
            resolver,
            observer,
            registry: OnceCell::new(),
        }
    }

    /// Set the delimited list of search locations.
    pub fn set_base_package(&mut self, base_package: impl Into<String>) {
        self.base_package = Some(base_package.into());
    }

    /// Set the explicit entity descriptors.
    pub fn set_entities(&mut self, entities: Vec<EntityDescriptor>) {
        self.entities = entities;
    }

    /// Run the registration pass and expose the completed registry.
    ///
    /// Explicit descriptors come first, then discoveries in location
    /// order with per-location order preserved. Each unique type is
    /// resolved and registered exactly once; a type present both
    /// explicitly and via discovery registers once. Any resolution or
    /// mapping failure aborts the whole pass and nothing is exposed.
    ///
    /// A second call after a successful pass fails with
    /// [`RegistrarError::AlreadyInitialized`]. A failed pass exposed
    /// nothing, so the registrar may be invoked again.
    pub fn initialize(&self) -> Result<Arc<MappingRegistry>, RegistrarError> {
        if self.registry.get().is_some() {
            return Err(RegistrarError::AlreadyInitialized);
        }

        self.observer.initialization_started();
        let started = Instant::now();

        let mut pending = self.entities.clone();
        if let Some(base_package) = &self.base_package {
            for location in split_locations(base_package) {
                pending.extend(self.scanner.scan(location, &MarkerKind::ALL));
            }
        }

        let registry = Arc::new(MappingRegistry::new());
        let mut seen = HashSet::new();
        let mut registered = 0usize;
        for descriptor in pending {
            if !seen.insert(descriptor.name.clone()) {
                continue;
            }
            let ty = self.resolver.resolve(&descriptor.name)?;
            registry.register(&ty)?;
            self.observer.entity_registered(&ty.name);
            registered += 1;
        }

        self.observer
            .initialization_completed(registered, started.elapsed());

        self.registry
            .set(registry.clone())
            .map_err(|_| RegistrarError::AlreadyInitialized)?;
        Ok(registry)
    }

    /// The completed registry singleton, `None` before initialization.
    pub fn object(&self) -> Option<Arc<MappingRegistry>> {
        self.registry.get().cloned()
    }

    /// Static type of the exposed object.
    pub fn object_type(&self) -> TypeId {
        TypeId::of::<MappingRegistry>()
    }

    /// The registrar always exposes a singleton.
    pub fn is_singleton(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "registrar_tests.rs"]
mod tests;
