//! Registrar errors.

use thiserror::Error;

use super::mapping::MappingError;
use super::resolve::ResolveError;

#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error("Registrar already initialized")]
    AlreadyInitialized,

    #[error("Resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Mapping failed: {0}")]
    Mapping(#[from] MappingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_initialized_error() {
        let err = RegistrarError::AlreadyInitialized;
        assert!(err.to_string().contains("already initialized"));
    }

    #[test]
    fn test_resolve_error_from() {
        let err = RegistrarError::from(ResolveError::NotFound("acme.garage.Car".to_string()));
        let display = err.to_string();
        assert!(display.contains("Resolution failed"));
        assert!(display.contains("acme.garage.Car"));
    }

    #[test]
    fn test_mapping_error_from() {
        let err = RegistrarError::from(MappingError::NotAnEntity("acme.garage.Car".to_string()));
        let display = err.to_string();
        assert!(display.contains("Mapping failed"));
        assert!(display.contains("acme.garage.Car"));
    }
}
