//! Error types for the entmap protocol layer.

mod mapping;
mod registrar;
mod resolve;

pub use mapping::*;
pub use registrar::*;
pub use resolve::*;
