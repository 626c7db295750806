//! Mapping errors raised by the registry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Type is not a mappable entity: {0}")]
    NotAnEntity(String),

    #[error("Entity has no identifier field: {0}")]
    MissingIdentifier(String),

    #[error("Kind '{kind}' is already mapped by {existing}, rejecting {incoming}")]
    KindCollision {
        kind: String,
        existing: String,
        incoming: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_entity_error() {
        let err = MappingError::NotAnEntity("acme.garage.Car".to_string());
        let display = err.to_string();
        assert!(display.contains("not a mappable entity"));
        assert!(display.contains("acme.garage.Car"));
    }

    #[test]
    fn test_missing_identifier_error() {
        let err = MappingError::MissingIdentifier("acme.garage.Car".to_string());
        let display = err.to_string();
        assert!(display.contains("no identifier field"));
        assert!(display.contains("acme.garage.Car"));
    }

    #[test]
    fn test_kind_collision_error() {
        let err = MappingError::KindCollision {
            kind: "Car".to_string(),
            existing: "acme.garage.Car".to_string(),
            incoming: "other.fleet.Car".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("Car"));
        assert!(display.contains("acme.garage.Car"));
        assert!(display.contains("other.fleet.Car"));
    }

    #[test]
    fn test_error_debug() {
        let err = MappingError::NotAnEntity("test".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotAnEntity"));
    }
}
