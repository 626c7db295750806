//! Startup wiring from configuration to the registrar.

use std::sync::Arc;

use tracing::info;

use entmap_config::Config;
use entmap_core::{EntityRegistrar, MappingRegistry};
use entmap_protocols::entity::EntityDescriptor;
use entmap_protocols::error::RegistrarError;
use entmap_protocols::resolver::TypeResolver;
use entmap_protocols::scanner::EntityScanner;

/// Build and initialize a registrar from the configuration surface.
///
/// Explicit entities from the configuration register first, then
/// discovery runs over the configured base package. Returns the completed
/// registry singleton.
pub fn initialize_from_config(
    config: &Config,
    scanner: Arc<dyn EntityScanner>,
    resolver: Arc<dyn TypeResolver>,
) -> Result<Arc<MappingRegistry>, RegistrarError> {
    let mut registrar = EntityRegistrar::new(scanner, resolver);

    if !config.registrar.base_package.is_empty() {
        registrar.set_base_package(config.registrar.base_package.clone());
    }
    if !config.registrar.entities.is_empty() {
        registrar.set_entities(
            config
                .registrar
                .entities
                .iter()
                .cloned()
                .map(EntityDescriptor::new)
                .collect(),
        );
    }

    let registry = registrar.initialize()?;
    info!("Mapping registry ready, {} entities", registry.len());
    Ok(registry)
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
