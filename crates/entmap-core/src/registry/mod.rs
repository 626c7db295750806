//! Registry for entity mapping metadata.

mod mapping;

pub use mapping::MappingRegistry;
