//! # entmap
//!
//! Entity-registration bootstrap for a persistence-mapping registry.
//!
//! During application startup, entmap collects entity types - explicitly
//! listed, or discovered under configured search locations by marker -
//! and registers each one with a [`MappingRegistry`]. The completed
//! registry is exposed as a read-only singleton for the life of the
//! process.
//!
//! ## Crates
//!
//! - `entmap-protocols` - traits and types
//! - `entmap-core` - registry and registrar
//! - `entmap-config` - configuration surface
//! - `entmap-scanner-index` - in-process discovery index

pub mod bootstrap;

pub use bootstrap::initialize_from_config;
pub use entmap_config::{Config, ConfigError, ConfigLoader, RegistrarConfig};
pub use entmap_core::{EntityRegistrar, MappingRegistry, TracingSink, split_locations};
pub use entmap_protocols::{
    EntityDescriptor, EntityMetadata, EntityScanner, EntityType, MappingError, MarkerKind,
    ObservationSink, RegistrarError, ResolveError, TypeResolver,
};
pub use entmap_scanner_index::TypeIndex;
