//! Type resolution errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Type not found: {0}")]
    NotFound(String),

    #[error("Type could not be loaded: {name}: {reason}")]
    Unloadable { name: String, reason: String },
}
